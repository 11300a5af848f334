//! DTOs for users_sea adapter.

/// Profile fields carried by every replay appearance of a user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub country_code: Option<String>,
    pub rank: i32,
    pub skill: Option<String>,
    pub skill_uncertainty: Option<f64>,
}

impl UserProfile {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            country_code: None,
            rank: 0,
            skill: None,
            skill_uncertainty: None,
        }
    }

    pub fn with_country(mut self, country_code: Option<String>) -> Self {
        self.country_code = country_code;
        self
    }

    pub fn with_rank(mut self, rank: i32) -> Self {
        self.rank = rank;
        self
    }

    pub fn with_skill(mut self, skill: Option<String>, uncertainty: Option<f64>) -> Self {
        self.skill = skill;
        self.skill_uncertainty = uncertainty;
        self
    }
}

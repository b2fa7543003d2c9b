use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Academic branches a student can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "CSE")]
    Cse,
    #[serde(rename = "ECE")]
    Ece,
    #[serde(rename = "MECH")]
    Mech,
    #[serde(rename = "CIVIL")]
    Civil,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "EEE")]
    Eee,
    #[serde(rename = "CHEM")]
    Chem,
}

impl Branch {
    /// Selection order shown in the registration form
    pub const ALL: [Branch; 7] = [
        Branch::Cse,
        Branch::Ece,
        Branch::Mech,
        Branch::Civil,
        Branch::It,
        Branch::Eee,
        Branch::Chem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Cse => "CSE",
            Branch::Ece => "ECE",
            Branch::Mech => "MECH",
            Branch::Civil => "CIVIL",
            Branch::It => "IT",
            Branch::Eee => "EEE",
            Branch::Chem => "CHEM",
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Branch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Branch::ALL
            .iter()
            .copied()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| format!("unknown branch: {}", s))
    }
}

/// Lowest and highest selectable semester
pub const SEMESTER_RANGE: std::ops::RangeInclusive<u32> = 1..=8;

/// Payload handed to [`crate::auth::AuthProvider::register`].
///
/// Carries every registration field except the password confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub registration_number: String,
    pub branch: String,
    pub semester: u32,
}

/// Account details exposed after sign-in (never includes the password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub registration_number: String,
    pub branch: String,
    pub semester: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_round_trip_names() {
        for branch in Branch::ALL {
            assert_eq!(branch.as_str().parse::<Branch>(), Ok(branch));
        }
        assert!("cse".parse::<Branch>().is_err());
        assert!("".parse::<Branch>().is_err());
    }

    #[test]
    fn test_new_user_has_no_confirm_password() {
        let user = NewUser {
            full_name: "Asha".to_string(),
            email: "asha@vitbhopal.ac.in".to_string(),
            password: "secret1".to_string(),
            registration_number: "21BCE1234".to_string(),
            branch: "CSE".to_string(),
            semester: 1,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("confirmPassword").is_none());
        assert_eq!(value["registrationNumber"], "21BCE1234");
    }
}

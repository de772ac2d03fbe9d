//! Wire types shared by the client and the browser helpers

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role carried in the cached user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UserRole {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[default]
    #[serde(rename = "ROLE_USER", other)]
    User,
}

impl UserRole {
    pub fn is_admin(self) -> bool {
        self == Self::Admin
    }

    /// Label shown in the navbar dropdown
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "관리자",
            Self::User => "사용자",
        }
    }
}

/// User record cached in persistent storage under the `user` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    #[serde(default)]
    pub login_id: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

/// Response of `GET /api/users/profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: i64,
    pub login_id: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Body of `POST /api/token`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRefreshRequest {
    pub refresh_token: String,
}

/// Response of `POST /api/token`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRefreshResponse {
    pub access_token: String,
}

/// Error payload returned by the backend on failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Error for quiz codes the client does not know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCode(pub String);

impl fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown code: {}", self.0)
    }
}

impl std::error::Error for UnknownCode {}

macro_rules! quiz_code {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $code:literal, $label:literal;)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $code)] $variant,)+
        }

        impl $name {
            /// Backend code, e.g. the enum constant name
            pub fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Human readable label
            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(Self::$variant),)+
                    other => Err(UnknownCode(other.to_string())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

quiz_code! {
    /// Problem category
    Category {
        SpringCore => "SPRING_CORE", "Spring Core";
        SpringBoot => "SPRING_BOOT", "Spring Boot";
        SpringMvc => "SPRING_MVC", "Spring MVC";
        SpringDataJpa => "SPRING_DATA_JPA", "Spring Data JPA";
        SpringSecurity => "SPRING_SECURITY", "Spring Security";
    }
}

quiz_code! {
    /// Problem difficulty
    Difficulty {
        Beginner => "BEGINNER", "초급";
        Intermediate => "INTERMEDIATE", "중급";
        Advanced => "ADVANCED", "고급";
    }
}

quiz_code! {
    /// Answer format of a problem
    ProblemType {
        MultipleChoice => "MULTIPLE_CHOICE", "객관식";
        ShortAnswer => "SHORT_ANSWER", "단답형";
        Descriptive => "DESCRIPTIVE", "서술형";
    }
}

impl Difficulty {
    /// Bootstrap contextual colour for difficulty badges
    pub fn color(self) -> &'static str {
        match self {
            Self::Beginner => "success",
            Self::Intermediate => "warning",
            Self::Advanced => "danger",
        }
    }
}

/// Label for a raw code, or the code itself when it is not recognised
pub fn label_or_code<T>(code: &str) -> String
where
    T: FromStr + fmt::Display,
{
    code.parse::<T>()
        .map(|known| known.to_string())
        .unwrap_or_else(|_| code.to_string())
}

/// Badge colour for a raw difficulty code
pub fn difficulty_color(code: &str) -> &'static str {
    code.parse::<Difficulty>()
        .map(Difficulty::color)
        .unwrap_or("secondary")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_user_uses_camel_case_keys() {
        let user: StoredUser =
            serde_json::from_str(r#"{"loginId":"kim","role":"ROLE_ADMIN"}"#).unwrap();
        assert_eq!(user.login_id.as_deref(), Some("kim"));
        assert!(user.role.is_admin());

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["loginId"], "kim");
        assert_eq!(json["role"], "ROLE_ADMIN");
    }

    #[test]
    fn empty_user_record_is_a_plain_user() {
        let user: StoredUser = serde_json::from_str("{}").unwrap();
        assert_eq!(user, StoredUser::default());
        assert_eq!(user.role.label(), "사용자");
    }

    #[test]
    fn unknown_role_is_treated_as_user() {
        let user: StoredUser = serde_json::from_str(r#"{"role":"ROLE_GUEST"}"#).unwrap();
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn profile_accepts_backend_timestamps() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"userId":7,"loginId":"lee","nickname":"Lee","createdAt":"2024-03-01T09:30:00","solvedProblems":[]}"#,
        )
        .unwrap();
        assert_eq!(profile.user_id, 7);
        assert_eq!(
            profile.created_at.map(|t| t.to_string()).as_deref(),
            Some("2024-03-01 09:30:00")
        );
    }

    #[test]
    fn labels_fall_back_to_raw_code() {
        assert_eq!(label_or_code::<Category>("SPRING_MVC"), "Spring MVC");
        assert_eq!(label_or_code::<Difficulty>("ADVANCED"), "고급");
        assert_eq!(label_or_code::<ProblemType>("SHORT_ANSWER"), "단답형");
        assert_eq!(label_or_code::<Category>("KOTLIN"), "KOTLIN");
    }

    #[test]
    fn difficulty_colors() {
        assert_eq!(difficulty_color("BEGINNER"), "success");
        assert_eq!(difficulty_color("INTERMEDIATE"), "warning");
        assert_eq!(difficulty_color("ADVANCED"), "danger");
        assert_eq!(difficulty_color("EXPERT"), "secondary");
    }
}

//! Authentication module

pub mod context;
pub mod expiry;

// Re-export commonly used items
pub use context::{
    AuthAction, AuthContext, AuthProvider, AuthState, use_auth, use_auth_state,
    use_is_authenticated, use_logout,
};

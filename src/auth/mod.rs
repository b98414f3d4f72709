pub mod events;
pub mod provider;
pub mod session;
pub mod supabase;

pub use provider::AuthProvider;
pub use session::{guard_step, leave_and_sign_out, use_auth, AuthContext, GuardState, RouteAccess};
pub use supabase::SupabaseAuth;

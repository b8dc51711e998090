use greenroom_core::config::Config;

/// Send-safe bundle handed to the UI at launch.
/// StaffService is created inside the component tree from this.
#[derive(Clone)]
pub struct StaffContext {
    pub config: Config,
    /// Artist search endpoint, either from config or the embedded server
    pub search_url: String,
}

/// Environment variable pointing at the directory that holds every projected binding.
pub const SERVICE_BINDING_ROOT: &str = "SERVICE_BINDING_ROOT";

/// Entry naming the kind of service a binding describes (e.g. `mysql`).
pub const TYPE_KEY: &str = "type";

/// Entry naming the vendor behind a binding (e.g. `mariadb`).
pub const PROVIDER_KEY: &str = "provider";

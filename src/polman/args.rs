use clap::{Parser, Subcommand};
use polman::session::SessionConfig;

/// Returns the version string, including git hash and commit date for dev
/// builds. Format: "0.4.2" or "0.4.2@abc1234 2024-01-15 14:30".
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "polman", version = get_version())]
#[command(about = "Manage catalogs, principals, and roles through the Polaris CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the Polaris CLI binary (default: $POLARIS_CLI_PATH or ./polaris)
    #[arg(long, global = true, value_name = "PATH")]
    pub cli_path: Option<String>,

    /// Backend host (default: $POLARIS_HOST or localhost)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Backend port (default: $POLARIS_PORT or 8181)
    #[arg(long, global = true)]
    pub port: Option<String>,

    /// OAuth client id (default: $POLARIS_CLIENT_ID)
    #[arg(long, global = true)]
    pub client_id: Option<String>,

    /// OAuth client secret (default: $POLARIS_CLIENT_SECRET)
    #[arg(long, global = true)]
    pub client_secret: Option<String>,
}

impl Cli {
    /// Environment-sourced defaults, overridden by whichever session flags
    /// were given on the command line.
    pub fn session(&self) -> SessionConfig {
        let mut session = SessionConfig::from_env();
        if let Some(cli_path) = &self.cli_path {
            session.cli_path = cli_path.clone();
        }
        if let Some(host) = &self.host {
            session.host = host.clone();
        }
        if let Some(port) = &self.port {
            session.port = port.clone();
        }
        if let Some(client_id) = &self.client_id {
            session.client_id = client_id.clone();
        }
        if let Some(client_secret) = &self.client_secret {
            session.client_secret = client_secret.clone();
        }
        session
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage catalogs
    #[command(subcommand, alias = "cat")]
    Catalogs(CatalogCommands),

    /// Manage principals
    #[command(subcommand, alias = "pr")]
    Principals(PrincipalCommands),

    /// Manage principal roles and grants
    #[command(subcommand, name = "principal-roles", alias = "roles")]
    PrincipalRoles(RoleCommands),
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// List catalogs
    #[command(alias = "ls")]
    List,

    /// Create a catalog
    Create {
        /// Catalog name
        name: String,

        /// Catalog type (INTERNAL/EXTERNAL)
        #[arg(long = "type", value_name = "TYPE")]
        catalog_type: Option<String>,

        /// Storage type (e.g. FILE, S3, AZURE, GCS)
        #[arg(long)]
        storage_type: Option<String>,

        /// Default base location for tables
        #[arg(long)]
        default_base_location: Option<String>,

        /// Role ARN (S3)
        #[arg(long)]
        role_arn: Option<String>,

        /// External ID (S3)
        #[arg(long)]
        external_id: Option<String>,

        /// Tenant ID (Azure)
        #[arg(long)]
        tenant_id: Option<String>,

        /// Multi-tenant app name (Azure)
        #[arg(long)]
        multi_tenant_app_name: Option<String>,

        /// Consent URL (Azure)
        #[arg(long)]
        consent_url: Option<String>,

        /// Service account (GCS)
        #[arg(long)]
        service_account: Option<String>,

        /// Remote URL (external catalogs)
        #[arg(long)]
        remote_url: Option<String>,

        /// Additional allowed storage location
        #[arg(long)]
        allowed_location: Option<String>,
    },

    /// Delete a catalog
    #[command(alias = "rm")]
    Delete {
        /// Catalog name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PrincipalCommands {
    /// List principals
    #[command(alias = "ls")]
    List,

    /// Create a principal
    Create {
        /// Principal name
        name: String,
    },

    /// Delete a principal
    #[command(alias = "rm")]
    Delete {
        /// Principal name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum RoleCommands {
    /// List principal roles
    #[command(alias = "ls")]
    List,

    /// List roles granted to a principal
    Assigned {
        /// Principal name
        principal: String,
    },

    /// Create a principal role
    Create {
        /// Role name
        name: String,

        /// Optional role property
        #[arg(long, value_name = "KEY=VALUE")]
        property: Option<String>,
    },

    /// Delete a principal role
    #[command(alias = "rm")]
    Delete {
        /// Role name
        name: String,
    },

    /// Grant a role to a principal
    Grant {
        /// Role name
        role: String,

        /// Principal to grant the role to
        #[arg(long)]
        principal: String,
    },

    /// Revoke a role from a principal
    Revoke {
        /// Role name
        role: String,

        /// Principal to revoke the role from
        #[arg(long)]
        principal: String,
    },
}

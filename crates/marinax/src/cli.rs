//! Clap derive structures for the `marinax` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! This file is also pulled into `build.rs` for man-page generation, so
//! it only depends on `clap` + `clap_complete`.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// marinax -- admin CLI for the Marine-Axis marketplace
#[derive(Debug, Parser)]
#[command(
    name = "marinax",
    version,
    about = "Administer the Marine-Axis marketplace from the command line",
    long_about = "A CLI for the Marine-Axis admin panel.\n\n\
        Staff and service providers sign in on separate surfaces; every\n\
        command group is gated by the same role policy that drives the\n\
        web panel's navigation.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Profile to use
    #[arg(long, short = 'p', env = "MARINAX_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API base URL (overrides profile)
    #[arg(long, env = "MARINAX_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "MARINAX_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "MARINAX_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "MARINAX_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one identifier per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// Which login surface to sign in on.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Platform staff (admin panel)
    Staff,
    /// Service provider portal
    Provider,
}

/// Staff permission tier.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Admin,
    Superadmin,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and cache the session token
    Login(LoginArgs),

    /// Sign out and drop the cached token
    Logout,

    /// Show the signed-in principal
    Whoami,

    /// View or update your own profile
    Profile(ProfileArgs),

    /// Marketplace overview counters
    #[command(alias = "dash")]
    Dashboard,

    /// Manage staff accounts (superadmin only)
    Admins(AdminsArgs),

    /// Manage service providers
    #[command(alias = "prov")]
    Providers(ProvidersArgs),

    /// Manage marketplace jobs
    Jobs(JobsArgs),

    /// Manage service categories
    #[command(alias = "cat")]
    Categories(CategoriesArgs),

    /// Manage blog posts
    Blogs(BlogsArgs),

    /// Manage customer bookings
    Bookings(BookingsArgs),

    /// Manage service contracts
    Contracts(ContractsArgs),

    /// Manage registered vessels
    Vessels(VesselsArgs),

    /// Manage refit projects
    Projects(ProjectsArgs),

    /// Site-wide settings (superadmin only)
    Settings(SettingsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared List Arguments ────────────────────────────────────────────

/// Shared pagination and filtering arguments for all list commands.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page to fetch (1-based)
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Rows per page
    #[arg(long, short = 'l', default_value = "20")]
    pub page_size: u32,

    /// Filter as key=value (repeatable; keys depend on the resource)
    /// Examples: "status=pending", "search=hull"
    #[arg(long, short = 'f')]
    pub filter: Vec<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SESSION
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Login surface
    #[arg(long, default_value = "staff", value_enum)]
    pub kind: KindArg,

    /// Login email (prompted when omitted)
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Show your profile
    Show,

    /// Update your profile
    Update {
        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Login email
        #[arg(long)]
        email: Option<String>,

        /// Prompt for a new password
        #[arg(long)]
        password: bool,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ADMINS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AdminsArgs {
    #[command(subcommand)]
    pub command: AdminsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AdminsCommand {
    /// List staff accounts
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get staff account details
    Show {
        /// Account ID
        id: String,
    },

    /// Invite a new staff account
    Create {
        /// Display name
        #[arg(long, required = true)]
        name: String,

        /// Login email
        #[arg(long, required = true)]
        email: String,

        /// Permission tier
        #[arg(long, default_value = "admin", value_enum)]
        role: RoleArg,
    },

    /// Update a staff account
    Update {
        /// Account ID
        id: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Login email
        #[arg(long)]
        email: Option<String>,

        /// Permission tier
        #[arg(long, value_enum)]
        role: Option<RoleArg>,
    },

    /// Delete a staff account
    Delete {
        /// Account ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PROVIDERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ProvidersArgs {
    #[command(subcommand)]
    pub command: ProvidersCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProvidersCommand {
    /// List providers
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get provider details
    Show {
        /// Provider ID
        id: String,
    },

    /// Register a provider
    Create {
        /// Company name
        #[arg(long, required = true)]
        name: String,

        /// Contact email
        #[arg(long, required = true)]
        email: String,

        /// Contact phone
        #[arg(long)]
        phone: Option<String>,

        /// Category slugs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        categories: Vec<String>,

        /// Home port / service area
        #[arg(long)]
        location: Option<String>,
    },

    /// Update a provider
    Update {
        /// Provider ID
        id: String,

        /// Company name
        #[arg(long)]
        name: Option<String>,

        /// Contact email
        #[arg(long)]
        email: Option<String>,

        /// Contact phone
        #[arg(long)]
        phone: Option<String>,

        /// Category slugs (replaces existing, comma-separated)
        #[arg(long, value_delimiter = ',')]
        categories: Option<Vec<String>>,

        /// Home port / service area
        #[arg(long)]
        location: Option<String>,
    },

    /// Delete a provider
    Delete {
        /// Provider ID
        id: String,
    },

    /// Approve a pending provider
    Approve {
        /// Provider ID
        id: String,
    },

    /// Reject a pending provider
    Reject {
        /// Provider ID
        id: String,

        /// Reason shown to the provider
        #[arg(long, required = true)]
        reason: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  JOBS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct JobsArgs {
    #[command(subcommand)]
    pub command: JobsCommand,
}

#[derive(Debug, Subcommand)]
pub enum JobsCommand {
    /// List jobs
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get job details
    Show {
        /// Job ID
        id: String,
    },

    /// Post a job
    Create {
        /// Job title
        #[arg(long, required = true)]
        title: String,

        /// Category slug
        #[arg(long, required = true)]
        category: String,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Budget in EUR
        #[arg(long)]
        budget: Option<f64>,

        /// Location
        #[arg(long)]
        location: Option<String>,
    },

    /// Update a job
    Update {
        /// Job ID
        id: String,

        /// Job title
        #[arg(long)]
        title: Option<String>,

        /// Category slug
        #[arg(long)]
        category: Option<String>,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Budget in EUR
        #[arg(long)]
        budget: Option<f64>,

        /// Location
        #[arg(long)]
        location: Option<String>,
    },

    /// Delete a job
    Delete {
        /// Job ID
        id: String,
    },

    /// Approve a pending job
    Approve {
        /// Job ID
        id: String,
    },

    /// Reject a pending job
    Reject {
        /// Job ID
        id: String,

        /// Reason shown to the poster
        #[arg(long, required = true)]
        reason: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CATEGORIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub command: CategoriesCommand,
}

#[derive(Debug, Subcommand)]
pub enum CategoriesCommand {
    /// List categories
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get category details
    Show {
        /// Category ID
        id: String,
    },

    /// Create a category
    Create {
        /// Display name
        #[arg(long, required = true)]
        name: String,

        /// URL slug
        #[arg(long, required = true)]
        slug: String,

        /// Description
        #[arg(long)]
        description: Option<String>,
    },

    /// Update a category
    Update {
        /// Category ID
        id: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// URL slug
        #[arg(long)]
        slug: Option<String>,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Enable/disable the category
        #[arg(long, action = clap::ArgAction::Set)]
        active: Option<bool>,
    },

    /// Delete a category
    Delete {
        /// Category ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BLOGS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BlogsArgs {
    #[command(subcommand)]
    pub command: BlogsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BlogsCommand {
    /// List blog posts
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get blog post details
    Show {
        /// Post ID
        id: String,
    },

    /// Create a blog post (draft)
    Create {
        /// Post title
        #[arg(long, required = true)]
        title: String,

        /// URL slug
        #[arg(long, required = true)]
        slug: String,

        /// Short excerpt
        #[arg(long)]
        excerpt: Option<String>,

        /// Author byline
        #[arg(long)]
        author: Option<String>,
    },

    /// Update a blog post
    Update {
        /// Post ID
        id: String,

        /// Post title
        #[arg(long)]
        title: Option<String>,

        /// URL slug
        #[arg(long)]
        slug: Option<String>,

        /// Short excerpt
        #[arg(long)]
        excerpt: Option<String>,

        /// Publish or unpublish
        #[arg(long, action = clap::ArgAction::Set)]
        published: Option<bool>,
    },

    /// Delete a blog post
    Delete {
        /// Post ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BOOKINGS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BookingsArgs {
    #[command(subcommand)]
    pub command: BookingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BookingsCommand {
    /// List bookings
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get booking details
    Show {
        /// Booking ID
        id: String,
    },

    /// Update a booking (status, schedule)
    Update {
        /// Booking ID
        id: String,

        /// New status (pending, confirmed, completed, cancelled)
        #[arg(long)]
        status: Option<String>,

        /// New schedule (RFC 3339, e.g. 2026-08-20T09:00:00Z)
        #[arg(long)]
        scheduled_for: Option<String>,
    },

    /// Delete a booking
    Delete {
        /// Booking ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONTRACTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ContractsArgs {
    #[command(subcommand)]
    pub command: ContractsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ContractsCommand {
    /// List contracts
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get contract details
    Show {
        /// Contract ID
        id: String,
    },

    /// Draw up a contract
    Create {
        /// Contract title
        #[arg(long, required = true)]
        title: String,

        /// Provider ID
        #[arg(long, required = true)]
        provider_id: String,

        /// Source booking ID
        #[arg(long)]
        booking_id: Option<String>,

        /// Contract value in EUR
        #[arg(long)]
        value: Option<f64>,
    },

    /// Update a contract
    Update {
        /// Contract ID
        id: String,

        /// Contract title
        #[arg(long)]
        title: Option<String>,

        /// New status (draft, active, completed, terminated)
        #[arg(long)]
        status: Option<String>,

        /// Contract value in EUR
        #[arg(long)]
        value: Option<f64>,
    },

    /// Delete a contract
    Delete {
        /// Contract ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  VESSELS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct VesselsArgs {
    #[command(subcommand)]
    pub command: VesselsCommand,
}

#[derive(Debug, Subcommand)]
pub enum VesselsCommand {
    /// List vessels
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get vessel details
    Show {
        /// Vessel ID
        id: String,
    },

    /// Register a vessel
    Create {
        /// Vessel name
        #[arg(long, required = true)]
        name: String,

        /// Vessel type (yacht, fishing, cargo, tug, ...)
        #[arg(long = "type", required = true)]
        vessel_type: String,

        /// Registration number
        #[arg(long)]
        registration: Option<String>,

        /// Length overall in meters
        #[arg(long)]
        length_m: Option<f64>,

        /// Owner email
        #[arg(long)]
        owner_email: Option<String>,

        /// Home port
        #[arg(long)]
        home_port: Option<String>,
    },

    /// Update a vessel
    Update {
        /// Vessel ID
        id: String,

        /// Vessel name
        #[arg(long)]
        name: Option<String>,

        /// Vessel type
        #[arg(long = "type")]
        vessel_type: Option<String>,

        /// Registration number
        #[arg(long)]
        registration: Option<String>,

        /// Length overall in meters
        #[arg(long)]
        length_m: Option<f64>,

        /// Home port
        #[arg(long)]
        home_port: Option<String>,
    },

    /// Delete a vessel
    Delete {
        /// Vessel ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PROJECTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ProjectsArgs {
    #[command(subcommand)]
    pub command: ProjectsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProjectsCommand {
    /// List projects
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get project details
    Show {
        /// Project ID
        id: String,
    },

    /// Open a project
    Create {
        /// Project name
        #[arg(long, required = true)]
        name: String,

        /// Vessel ID
        #[arg(long, required = true)]
        vessel_id: String,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        started_on: Option<String>,
    },

    /// Update a project
    Update {
        /// Project ID
        id: String,

        /// Project name
        #[arg(long)]
        name: Option<String>,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// New status (planned, in_progress, completed, on_hold)
        #[arg(long)]
        status: Option<String>,

        /// Completion date (YYYY-MM-DD)
        #[arg(long)]
        completed_on: Option<String>,
    },

    /// Delete a project
    Delete {
        /// Project ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SETTINGS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Show site-wide settings
    Show,

    /// Update site-wide settings
    Set {
        /// Site display name
        #[arg(long)]
        site_name: Option<String>,

        /// Support contact email
        #[arg(long)]
        support_email: Option<String>,

        /// Enable/disable maintenance mode
        #[arg(long, action = clap::ArgAction::Set)]
        maintenance_mode: Option<bool>,

        /// Auto-approve new providers
        #[arg(long, action = clap::ArgAction::Set)]
        provider_auto_approval: Option<bool>,

        /// Minimum booking lead time in hours
        #[arg(long)]
        booking_lead_time_hours: Option<u32>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a password in the system keyring
    SetPassword {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

//! Named façade operations, grouped by API area.
//!
//! Every method is a thin wrapper over [`crate::ConsoleClient::invoke`]: it
//! names the path parameters of one endpoint and builds its body.

mod app_registry;
mod credentials;
mod dev_terms;
mod extensions;
mod integrations;
mod organizations;
mod projects;
mod workspaces;

/// `appType` sent on every app registry call that declares it.
pub const APP_REGISTRY_APP_TYPE: &str = "JGR";
/// `assetType` of application icon uploads.
pub const ICON_ASSET_TYPE: &str = "ICON";

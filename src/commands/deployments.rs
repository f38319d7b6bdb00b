use crate::client::HttpClient;
use crate::config::ContextManager;
use crate::history::find_revision_history;
use crate::output::{OutputFormat, print_output};
use crate::types::{ConnectionArgs, DeploymentOperation};
use anyhow::{Context, Result};
use std::str::FromStr;

/// Handle deployment history commands
pub async fn handle_deployment_command(
    operation: &DeploymentOperation,
    conn: &ConnectionArgs,
) -> Result<()> {
    match operation {
        DeploymentOperation::Source {
            name,
            deployment_id,
            namespace,
            output,
        } => {
            handle_deployment_source(
                name,
                deployment_id,
                namespace,
                &output.output,
                conn,
            )
            .await
        }
    }
}

async fn handle_deployment_source(
    name: &str,
    deployment_id: &str,
    namespace: &str,
    output: &str,
    conn: &ConnectionArgs,
) -> Result<()> {
    // All argument validation happens before the remote call.
    let format = OutputFormat::from_str(output)?;
    let (app_name, app_ns) = parse_app_qualified_name(name, namespace)?;
    let id: i64 = deployment_id.parse().with_context(|| {
        format!("invalid deployment id '{deployment_id}': expected an integer")
    })?;

    let server_url = resolve_server_url(conn).await?;
    let client = HttpClient::new(&server_url)?;
    let app = client.get_application(&app_name, &app_ns).await?;

    let revision = find_revision_history(&app, id)?;
    print_output(&revision.source, format)?;
    Ok(())
}

/// Split an optionally namespace-qualified application name.
///
/// `NAMESPACE/NAME` wins over the namespace flag; a bare name takes the
/// flag's value.
pub(crate) fn parse_app_qualified_name(
    name: &str,
    default_namespace: &str,
) -> Result<(String, String)> {
    match name.split_once('/') {
        Some((ns, app)) => {
            if ns.is_empty() || app.is_empty() || app.contains('/') {
                anyhow::bail!(
                    "invalid application name '{}': expected NAME or NAMESPACE/NAME",
                    name
                );
            }
            Ok((app.to_string(), ns.to_string()))
        }
        None => Ok((name.to_string(), default_namespace.to_string())),
    }
}

async fn resolve_server_url(conn: &ConnectionArgs) -> Result<String> {
    if let Some(server) = &conn.server {
        return Ok(server.clone());
    }
    let manager = ContextManager::new().await?;
    manager
        .get_current_context()
        .and_then(|ctx| ctx.server_url.clone())
        .ok_or_else(|| anyhow::anyhow!("No server URL configured: pass --server or set one with 'appctl context set --url URL'"))
}

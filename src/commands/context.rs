use crate::config::ContextManager;
use crate::types::ContextOperation;
use anyhow::Result;

/// Handle context management commands
pub async fn handle_context_command(
    operation: &ContextOperation,
) -> Result<()> {
    let mut manager = ContextManager::new().await?;
    handle_context_command_with_manager(operation, &mut manager).await
}

/// Handle context management commands with a specific ContextManager (useful for testing)
pub async fn handle_context_command_with_manager(
    operation: &ContextOperation,
    manager: &mut ContextManager,
) -> Result<()> {
    match operation {
        ContextOperation::Set { name, url } => {
            manager.set_context(name.clone(), url.clone()).await?;
            println!("Context updated");
            Ok(())
        }
        ContextOperation::Get => {
            let config = manager.config();
            let name = &config.current_context;
            let context = config
                .current_context()
                .ok_or_else(|| anyhow::anyhow!("No context selected"))?;
            println!("Current context: {}", name);
            print!("{}", serde_yaml::to_string(context)?);
            Ok(())
        }
        ContextOperation::Select { name } => {
            manager.select_context(name.clone()).await?;
            println!("Switched to context '{}'", name);
            Ok(())
        }
    }
}

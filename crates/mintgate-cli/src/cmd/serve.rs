use mintgate_core::Config;

/// Run the frame server until it fails or Ctrl-C is pressed.
pub fn run(config: Config) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async move {
        tokio::select! {
            res = mintgate_server::serve(config) => res,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                Ok(())
            }
        }
    })
}

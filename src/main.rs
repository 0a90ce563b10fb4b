use anyhow::Context;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = folio::default().context("failed to set up the event loop")?;
    app.run().context("portfolio viewer stopped with an error")
}

use core_config::tracing::install_color_eyre;
use migration::Migrator;
use sea_orm_migration::cli;

// The migration CLI installs its own tracing subscriber (`-v` for debug output).
#[tokio::main]
async fn main() {
    install_color_eyre();
    cli::run_cli(Migrator).await;
}

fn main() -> anyhow::Result<()> {
    rangepicker::Cli::run()
}

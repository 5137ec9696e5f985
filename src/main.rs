fn main() -> anyhow::Result<()> {
    spherescout_lib::run()
}

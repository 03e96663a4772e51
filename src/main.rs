use statline::app::Args;
use statline::workers::list;

fn main() -> anyhow::Result<()> {
    let args = Args::load();
    list::run(&args)
}

use clap::Parser;
use colored::Colorize;
use recsync::aggregator::Aggregator;
use recsync::console::Stdout;
use recsync::error::Result;
use recsync::presenter::Presenter;
use recsync::remote::StubRemote;
use recsync::store::memory::MemoryStore;
use recsync::store::RecordStore;

#[derive(Parser, Debug)]
#[command(name = "recsync")]
#[command(version)]
#[command(about = "Walk a layered store/remote/use-case/presenter stack through its paces")]
struct Cli {}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

const SEED_RECORDS: [&str; 3] = ["record1", "record2", "record3"];

fn run() -> Result<()> {
    let _cli = Cli::parse();
    let mut presenter = init_presenter();

    println!("{}", "=== Initial Data ===".bold());
    presenter.show_summary()?;
    presenter.show_combined()?;

    println!("\n{}", "=== Adding New Record to DB ===".bold());
    presenter.aggregator_mut().store_mut().add("record4".into());
    presenter.show_summary()?;
    presenter.show_combined()?;

    println!("\n{}", "=== Updating Record at Index 1 ===".bold());
    presenter.show_update(1, "updated_record2".into())?;

    println!("\n{}", "=== Syncing Data with Network ===".bold());
    presenter.show_sync()?;

    println!("\n{}", "=== Deleting Record at Index 0 ===".bold());
    let removed = presenter.aggregator_mut().store_mut().delete(0)?;
    println!("Removed Record: {}", removed);
    presenter.show_summary()?;
    presenter.show_combined()?;

    Ok(())
}

fn init_presenter() -> Presenter<MemoryStore, StubRemote<Stdout>, Stdout> {
    // Everything downstream of here is wired by constructor injection; this
    // is the only place that knows the concrete store, remote, and sink.
    let store = MemoryStore::with_records(SEED_RECORDS);
    let remote = StubRemote::new(Stdout);
    let aggregator = Aggregator::new(store, remote);
    Presenter::new(aggregator, Stdout)
}

// Writes the gymdesk man page to stdout, or to the directory given as the first argument

use clap::CommandFactory;
use clap_mangen::Man;
use gymdesk::cli::Cli;

fn main() -> std::io::Result<()> {
    let cmd = Cli::command();
    let man = Man::new(cmd);

    match std::env::args().nth(1) {
        Some(dir) => {
            let path = std::path::Path::new(&dir).join("gymdesk.1");
            let mut file = std::fs::File::create(&path)?;
            man.render(&mut file)?;
            eprintln!("Wrote {}", path.display());
        }
        None => man.render(&mut std::io::stdout())?,
    }
    Ok(())
}

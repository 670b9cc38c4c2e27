use anyhow::Result;
use argh::FromArgs;
use design_patterns::command::RemoteControl;
use design_patterns::devices::{
    Fan, FanOffCommand, FanOnCommand, Light, LightOffCommand, LightOnCommand,
};
use design_patterns::library::{BookFactory, Librarian, Library, Reader};
use design_patterns::pasta::{FettuccineBuilder, PastaDirector, PenneBuilder, SpaghettiBuilder};
use design_patterns::renovation::{Finisher, Foreman, Painter, TileWorker};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

#[derive(FromArgs)]
/// Run the design-pattern demos.
struct Args {
    #[argh(subcommand)]
    demo: Demo,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Demo {
    Remote(RemoteDemo),
    Library(LibraryDemo),
    Renovation(RenovationDemo),
    Pasta(PastaDemo),
    All(AllDemos),
}

#[derive(FromArgs)]
/// Command pattern: a remote control driving a light and a fan.
#[argh(subcommand, name = "remote")]
struct RemoteDemo {}

#[derive(FromArgs)]
/// Command, Factory Method and an observer-style logger in a library.
#[argh(subcommand, name = "library")]
struct LibraryDemo {}

#[derive(FromArgs)]
/// Builder pattern: a construction crew run by a foreman.
#[argh(subcommand, name = "renovation")]
struct RenovationDemo {}

#[derive(FromArgs)]
/// Builder pattern: three pasta recipes assembled by one director.
#[argh(subcommand, name = "pasta")]
struct PastaDemo {}

#[derive(FromArgs)]
/// Run every demo in sequence.
#[argh(subcommand, name = "all")]
struct AllDemos {}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    let mut out = std::io::stdout().lock();
    match args.demo {
        Demo::Remote(_) => remote_demo(&mut out),
        Demo::Library(_) => library_demo(&mut out),
        Demo::Renovation(_) => renovation_demo(&mut out),
        Demo::Pasta(_) => pasta_demo(&mut out),
        Demo::All(_) => {
            remote_demo(&mut out)?;
            writeln!(out)?;
            library_demo(&mut out)?;
            writeln!(out)?;
            renovation_demo(&mut out)?;
            writeln!(out)?;
            pasta_demo(&mut out)
        }
    }
}

fn remote_demo(out: &mut dyn Write) -> Result<()> {
    let light = Rc::new(Light);
    let fan = Rc::new(Fan);

    let mut remote = RemoteControl::new();

    // Pressing before anything is bound is informational, not an error.
    remote.press_button(out)?;

    remote.set_command(Box::new(LightOnCommand::new(Rc::clone(&light))));
    remote.press_button(out)?;

    remote.set_command(Box::new(FanOnCommand::new(Rc::clone(&fan))));
    remote.press_button(out)?;

    remote.set_command(Box::new(LightOffCommand::new(light)));
    remote.press_button(out)?;

    remote.set_command(Box::new(FanOffCommand::new(fan)));
    remote.press_button(out)?;

    Ok(())
}

fn library_demo(out: &mut dyn Write) -> Result<()> {
    let factory = BookFactory;
    let library = Rc::new(RefCell::new(Library::new()));
    // stdout's lock is reentrant, so the librarian's log interleaves
    // cleanly with the narration on the same thread.
    let librarian = Librarian::new(Box::new(std::io::stdout()));
    let mut reader = Reader::new(Rc::clone(&library), librarian);

    let orwell = factory.create_book("1984", "George Orwell");
    let spiderman = factory.create_book("1963", "The Amazing Spider-Man");

    reader.request_add_book(orwell.clone(), out)?;
    reader.request_add_book(spiderman, out)?;

    writeln!(out, "\nBooks in the library after adding:")?;
    library.borrow().show_books(out)?;

    reader.request_remove_book(orwell, out)?;

    let tolstoy = factory.create_book("1869", "War and Peace");
    reader.request_add_book(tolstoy, out)?;

    writeln!(out, "\nBooks in the library after removing:")?;
    library.borrow().show_books(out)?;

    Ok(())
}

fn renovation_demo(out: &mut dyn Write) -> Result<()> {
    let foreman = Foreman::new();

    writeln!(out, "The tiler's work:")?;
    let mut tiler = TileWorker::new();
    foreman.make_floors(&mut tiler, out)?;
    writeln!(out, "{}", tiler.result())?;

    writeln!(out, "\nThe finisher's work:")?;
    let mut finisher = Finisher::new();
    foreman.level_walls(&mut finisher, out)?;
    writeln!(out, "{}", finisher.result())?;

    writeln!(out, "\nThe painter's work:")?;
    let mut painter = Painter::new();
    foreman.paint_walls(&mut painter, out)?;
    writeln!(out, "{}", painter.result())?;

    writeln!(out, "\nThe full repair:")?;
    foreman.full_repair(out)?;

    Ok(())
}

fn pasta_demo(out: &mut dyn Write) -> Result<()> {
    let mut director = PastaDirector::new(SpaghettiBuilder::new());
    writeln!(out, "Spaghetti: {}", director.prepare_pasta())?;

    let mut director = PastaDirector::new(FettuccineBuilder::new());
    writeln!(out, "\nFettuccine: {}", director.prepare_pasta())?;

    let mut director = PastaDirector::new(PenneBuilder::new());
    writeln!(out, "\nPenne: {}", director.prepare_pasta())?;

    Ok(())
}

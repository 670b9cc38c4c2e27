use anyhow::Result;
use std::io::Write;

/// Floor trade. Preparation must precede tiling.
pub trait FloorWork {
    fn prepare_floors(&mut self, out: &mut dyn Write) -> Result<()>;
    fn lay_tiles(&mut self, out: &mut dyn Write) -> Result<()>;
}

/// Wall-levelling trade. Putty must precede plaster.
pub trait WallWork {
    fn apply_putty(&mut self, out: &mut dyn Write) -> Result<()>;
    fn plaster_walls(&mut self, out: &mut dyn Write) -> Result<()>;
}

/// Painting trade. Primer must precede paint.
pub trait PaintWork {
    fn prime_walls(&mut self, out: &mut dyn Write) -> Result<()>;
    fn paint_walls(&mut self, out: &mut dyn Write) -> Result<()>;
}

/// The tiler. Only floor work; walls are someone else's job.
#[derive(Default)]
pub struct TileWorker {
    floors_prepared: bool,
    tiles_laid: bool,
}

impl TileWorker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summary of the work done so far; partial until both steps ran.
    pub fn result(&self) -> String {
        if self.floors_prepared && self.tiles_laid {
            "The floors are ready!".to_string()
        } else {
            "The floors are not done yet.".to_string()
        }
    }
}

impl FloorWork for TileWorker {
    fn prepare_floors(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Preparing the floor: old covering removed, surface levelled."
        )?;
        self.floors_prepared = true;
        Ok(())
    }

    fn lay_tiles(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Laying the tiles: tiles are down, joints grouted.")?;
        self.tiles_laid = true;
        Ok(())
    }
}

/// The finisher. Levels the walls before the painter arrives.
#[derive(Default)]
pub struct Finisher {
    puttied: bool,
    plastered: bool,
}

impl Finisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> String {
        if self.puttied && self.plastered {
            "The walls are prepped: puttied and plastered.".to_string()
        } else {
            "The walls are not prepped yet.".to_string()
        }
    }
}

impl WallWork for Finisher {
    fn apply_putty(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Applying putty to the walls.")?;
        self.puttied = true;
        Ok(())
    }

    fn plaster_walls(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Plastering the walls.")?;
        self.plastered = true;
        Ok(())
    }
}

/// The painter. Takes over once the finisher is done.
#[derive(Default)]
pub struct Painter {
    primed: bool,
    painted: bool,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> String {
        if self.primed && self.painted {
            "The walls are primed and painted.".to_string()
        } else {
            "The walls are not painted yet.".to_string()
        }
    }
}

impl PaintWork for Painter {
    fn prime_walls(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Priming the walls before painting.")?;
        self.primed = true;
        Ok(())
    }

    fn paint_walls(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Painting the walls in the chosen colour.")?;
        self.painted = true;
        Ok(())
    }
}

/// Director for the repair workflow. The step order within each trade is
/// a contract: preparation before tiling, putty before plaster, primer
/// before paint.
#[derive(Default)]
pub struct Foreman;

impl Foreman {
    pub fn new() -> Self {
        Self
    }

    /// The tiler does the floors and lays the tiles.
    pub fn make_floors(&self, worker: &mut dyn FloorWork, out: &mut dyn Write) -> Result<()> {
        worker.prepare_floors(out)?;
        worker.lay_tiles(out)
    }

    /// The finisher putties and plasters the walls.
    pub fn level_walls(&self, worker: &mut dyn WallWork, out: &mut dyn Write) -> Result<()> {
        worker.apply_putty(out)?;
        worker.plaster_walls(out)
    }

    /// The painter primes and paints the walls.
    pub fn paint_walls(&self, worker: &mut dyn PaintWork, out: &mut dyn Write) -> Result<()> {
        worker.prime_walls(out)?;
        worker.paint_walls(out)
    }

    /// Full turnkey repair with a fresh crew.
    pub fn full_repair(&self, out: &mut dyn Write) -> Result<()> {
        let mut tiler = TileWorker::new();
        self.make_floors(&mut tiler, out)?;

        let mut finisher = Finisher::new();
        self.level_walls(&mut finisher, out)?;

        let mut painter = Painter::new();
        self.paint_walls(&mut painter, out)?;

        writeln!(out, "Turnkey repair complete!")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_worker_is_ready_after_its_two_steps() {
        let foreman = Foreman::new();
        let mut tiler = TileWorker::new();
        // Another worker on site changes nothing for the tiler.
        let _idle_finisher = Finisher::new();

        let mut out: Vec<u8> = Vec::new();
        foreman.make_floors(&mut tiler, &mut out).unwrap();

        assert_eq!(tiler.result(), "The floors are ready!");
    }

    #[test]
    fn test_result_before_any_step_describes_incomplete_work() {
        assert_eq!(TileWorker::new().result(), "The floors are not done yet.");
        assert_eq!(Finisher::new().result(), "The walls are not prepped yet.");
        assert_eq!(Painter::new().result(), "The walls are not painted yet.");
    }

    #[test]
    fn test_each_trade_narrates_its_steps_in_order() {
        let foreman = Foreman::new();
        let mut out: Vec<u8> = Vec::new();

        let mut finisher = Finisher::new();
        foreman.level_walls(&mut finisher, &mut out).unwrap();

        let mut painter = Painter::new();
        foreman.paint_walls(&mut painter, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Applying putty to the walls.\n\
             Plastering the walls.\n\
             Priming the walls before painting.\n\
             Painting the walls in the chosen colour.\n"
        );
        assert_eq!(finisher.result(), "The walls are prepped: puttied and plastered.");
        assert_eq!(painter.result(), "The walls are primed and painted.");
    }

    #[test]
    fn test_full_repair_runs_all_trades_and_reports_completion() {
        let foreman = Foreman::new();
        let mut out: Vec<u8> = Vec::new();

        foreman.full_repair(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Preparing the floor: old covering removed, surface levelled.\n\
             Laying the tiles: tiles are down, joints grouted.\n\
             Applying putty to the walls.\n\
             Plastering the walls.\n\
             Priming the walls before painting.\n\
             Painting the walls in the chosen colour.\n\
             Turnkey repair complete!\n"
        );
    }
}

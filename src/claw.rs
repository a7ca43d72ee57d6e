//! Claw Machine Sequencer
//!
//! The mini-game as a pure state machine, deterministic given the remaining
//! prize pool. The component drives `advance()` on a timer and renders the
//! positions; nothing in here touches the DOM.
//!
//! Idle -> MovingLeft/MovingRight -> Idle
//! Idle -> Dropping -> Grabbing -> Rising -> Transporting -> Releasing -> Idle
//!
//! Commands are only accepted while Idle. A grab picks the first unclaimed
//! prize within [`GRAB_TOLERANCE`] of the claw; a miss rides the rest of
//! the sequence back up empty-handed with the pool untouched.

/// Horizontal bounds and step of the claw head
pub const MIN_X: i32 = 40;
pub const MAX_X: i32 = 360;
pub const STEP: i32 = 20;
pub const START_X: i32 = 200;
/// Maximum horizontal distance between claw and prize for a grab
pub const GRAB_TOLERANCE: i32 = 30;
/// Where the bin sits; claw and prize travel here together
pub const BIN_X: i32 = 280;

#[derive(Debug, Clone, PartialEq)]
pub struct Prize {
    /// Catalog id credited on a win
    pub item_id: String,
    pub name: String,
    pub x: i32,
    pub y: i32,
}

/// The five plushies in their pile formation.
pub fn default_prizes() -> Vec<Prize> {
    fn prize(item_id: &str, name: &str, x: i32, y: i32) -> Prize {
        Prize { item_id: item_id.into(), name: name.into(), x, y }
    }
    vec![
        prize("plushie-cat", "Cat", 20, 370),
        prize("plushie-hippo", "Hippo", 130, 320),
        prize("plushie-frog", "Frog", 150, 370),
        prize("plushie-dog", "Dog", 80, 370),
        prize("plushie-giraffe", "Giraffe", 200, 370),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClawState {
    Idle,
    MovingLeft,
    MovingRight,
    Dropping,
    Grabbing,
    Rising,
    Transporting,
    Releasing,
}

/// What happened during one `advance()` step
#[derive(Debug, Clone, PartialEq)]
pub enum ClawEvent {
    /// Sequence continues; keep advancing
    Continue,
    /// A movement step landed; back at Idle
    Moved(i32),
    /// Claw closed on nothing and is back at Idle
    ReturnedEmpty,
    /// Prize dropped into the bin; sequence complete
    PrizeWon(Prize),
}

#[derive(Debug, Clone)]
pub struct ClawMachine {
    x: i32,
    state: ClawState,
    prizes: Vec<Prize>,
    grabbed: Option<Prize>,
}

/// Command rejected because the claw is mid-sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClawBusy;

impl ClawMachine {
    pub fn new(prizes: Vec<Prize>) -> Self {
        Self { x: START_X, state: ClawState::Idle, prizes, grabbed: None }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn state(&self) -> ClawState {
        self.state
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn grabbed(&self) -> Option<&Prize> {
        self.grabbed.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.state != ClawState::Idle
    }

    pub fn move_left(&mut self) -> Result<(), ClawBusy> {
        if self.is_busy() {
            return Err(ClawBusy);
        }
        self.state = ClawState::MovingLeft;
        Ok(())
    }

    pub fn move_right(&mut self) -> Result<(), ClawBusy> {
        if self.is_busy() {
            return Err(ClawBusy);
        }
        self.state = ClawState::MovingRight;
        Ok(())
    }

    /// Start the drop sequence.
    pub fn drop_claw(&mut self) -> Result<(), ClawBusy> {
        if self.is_busy() {
            return Err(ClawBusy);
        }
        self.state = ClawState::Dropping;
        Ok(())
    }

    /// Run one phase of the sequence. No-op while Idle.
    pub fn advance(&mut self) -> ClawEvent {
        match self.state {
            ClawState::Idle => ClawEvent::Continue,
            ClawState::MovingLeft => {
                self.x = (self.x - STEP).max(MIN_X);
                self.state = ClawState::Idle;
                ClawEvent::Moved(self.x)
            }
            ClawState::MovingRight => {
                self.x = (self.x + STEP).min(MAX_X);
                self.state = ClawState::Idle;
                ClawEvent::Moved(self.x)
            }
            ClawState::Dropping => {
                // Claw closes at the bottom: pick the first prize in reach
                if let Some(at) = self
                    .prizes
                    .iter()
                    .position(|p| (p.x - self.x).abs() < GRAB_TOLERANCE)
                {
                    self.grabbed = Some(self.prizes.remove(at));
                }
                self.state = ClawState::Grabbing;
                ClawEvent::Continue
            }
            ClawState::Grabbing => {
                if self.grabbed.is_some() {
                    self.state = ClawState::Rising;
                    ClawEvent::Continue
                } else {
                    self.reset();
                    ClawEvent::ReturnedEmpty
                }
            }
            ClawState::Rising => {
                self.state = ClawState::Transporting;
                ClawEvent::Continue
            }
            ClawState::Transporting => {
                // Claw and prize travel to the bin together
                self.x = BIN_X;
                self.state = ClawState::Releasing;
                ClawEvent::Continue
            }
            ClawState::Releasing => {
                let prize = self.grabbed.take();
                self.reset();
                match prize {
                    Some(prize) => ClawEvent::PrizeWon(prize),
                    None => ClawEvent::ReturnedEmpty,
                }
            }
        }
    }

    fn reset(&mut self) {
        self.x = START_X;
        self.state = ClawState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_left(machine: &mut ClawMachine) -> i32 {
        machine.move_left().unwrap();
        match machine.advance() {
            ClawEvent::Moved(x) => x,
            other => panic!("expected a move, got {:?}", other),
        }
    }

    fn step_right(machine: &mut ClawMachine) -> i32 {
        machine.move_right().unwrap();
        match machine.advance() {
            ClawEvent::Moved(x) => x,
            other => panic!("expected a move, got {:?}", other),
        }
    }

    fn run_sequence(machine: &mut ClawMachine) -> ClawEvent {
        machine.drop_claw().unwrap();
        loop {
            match machine.advance() {
                ClawEvent::Continue => continue,
                done => return done,
            }
        }
    }

    #[test]
    fn movement_is_bounded() {
        let mut machine = ClawMachine::new(Vec::new());
        for _ in 0..100 {
            step_left(&mut machine);
        }
        assert_eq!(machine.x(), MIN_X);
        for _ in 0..100 {
            step_right(&mut machine);
        }
        assert_eq!(machine.x(), MAX_X);
    }

    #[test]
    fn commands_rejected_while_busy() {
        let mut machine = ClawMachine::new(default_prizes());
        machine.drop_claw().unwrap();
        assert_eq!(machine.move_left(), Err(ClawBusy));
        assert_eq!(machine.move_right(), Err(ClawBusy));
        assert_eq!(machine.drop_claw(), Err(ClawBusy));
    }

    #[test]
    fn commands_rejected_mid_move() {
        let mut machine = ClawMachine::new(Vec::new());
        machine.move_left().unwrap();
        assert_eq!(machine.state(), ClawState::MovingLeft);
        assert_eq!(machine.move_right(), Err(ClawBusy));
        machine.advance();
        assert_eq!(machine.state(), ClawState::Idle);
    }

    #[test]
    fn grab_within_tolerance_wins_the_prize() {
        // Giraffe sits at x=200, the claw's start position
        let mut machine = ClawMachine::new(default_prizes());
        let event = run_sequence(&mut machine);
        match event {
            ClawEvent::PrizeWon(prize) => assert_eq!(prize.item_id, "plushie-giraffe"),
            other => panic!("expected a win, got {:?}", other),
        }
        assert_eq!(machine.prizes().len(), 4);
        assert_eq!(machine.state(), ClawState::Idle);
        assert_eq!(machine.x(), START_X);
    }

    #[test]
    fn miss_returns_empty_with_pool_intact() {
        let mut machine = ClawMachine::new(default_prizes());
        // Walk far right, away from every prize
        while step_right(&mut machine) < MAX_X {}
        let event = run_sequence(&mut machine);
        assert_eq!(event, ClawEvent::ReturnedEmpty);
        assert_eq!(machine.prizes().len(), 5);
        assert_eq!(machine.state(), ClawState::Idle);
    }

    #[test]
    fn each_prize_is_won_at_most_once() {
        let mut machine = ClawMachine::new(default_prizes());
        let first = run_sequence(&mut machine);
        assert!(matches!(first, ClawEvent::PrizeWon(_)));
        // Claw is back at START_X; the giraffe is gone and nothing else
        // is within tolerance of x=200.
        let second = run_sequence(&mut machine);
        assert_eq!(second, ClawEvent::ReturnedEmpty);
        assert_eq!(machine.prizes().len(), 4);
    }

    #[test]
    fn empty_pool_never_wins() {
        let mut machine = ClawMachine::new(Vec::new());
        assert_eq!(run_sequence(&mut machine), ClawEvent::ReturnedEmpty);
    }
}

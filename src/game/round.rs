use rand::Rng;
use tracing::{debug, info, warn};

use crate::card::{Card, CardId};
use crate::compare::{compare, is_identity_tie};
use crate::error::{PlayError, SelectError, StepError};
use crate::pacing::Pacer;
use crate::result::RoundResolution;

use super::{Game, Round, RoundPhase, RoundTicket};

impl Round {
    fn check(&self, ticket: RoundTicket, phase: RoundPhase) -> Result<(), StepError> {
        if ticket.epoch != self.epoch {
            warn!(
                ticket_epoch = ticket.epoch,
                epoch = self.epoch,
                "stale round ticket"
            );
            return Err(StepError::StaleRound);
        }
        if self.state.phase != phase {
            return Err(StepError::InvalidState);
        }
        Ok(())
    }
}

impl<R: Rng> Game<R> {
    /// Selects the player's card by id and turns it face up.
    ///
    /// The returned ticket drives the rest of the round through
    /// [`reveal`](Self::reveal) and [`resolve`](Self::resolve).
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the game unchanged, if the id is not a card,
    /// a card is already selected this round, or the round is over.
    pub fn select_card(&self, card_id: u8) -> Result<RoundTicket, SelectError> {
        let id = CardId::new(card_id).ok_or(SelectError::UnknownCard)?;

        let mut round = self.round.lock();
        if round.state.is_over {
            return Err(SelectError::RoundOver);
        }
        if round.state.phase != RoundPhase::Idle {
            return Err(SelectError::AlreadySelected);
        }

        let card = Card::from_id(id);
        round.state.revealed_card = Some(card);
        round.state.phase = RoundPhase::PlayerSelecting;
        let ticket = RoundTicket {
            epoch: round.epoch,
            card: id,
        };
        drop(round);

        debug!(card = %card, "player selected");
        Ok(ticket)
    }

    /// Commits the revealed card and lets the computer draw.
    ///
    /// Runs once the reveal delay has passed. Returns the computer's card,
    /// or `None` if the deck is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket's round was reset, or the round is not
    /// waiting on the reveal.
    pub fn reveal(&self, ticket: RoundTicket) -> Result<Option<Card>, StepError> {
        let mut round = self.round.lock();
        round.check(ticket, RoundPhase::PlayerSelecting)?;

        round.state.player_card = Some(Card::from_id(ticket.card));
        let computer = self.draw_computer_card();
        round.state.computer_card = computer;
        round.state.phase = RoundPhase::ComputerDrawing;

        Ok(computer)
    }

    /// Scores the round and records it in the history.
    ///
    /// Runs once the compare delay has passed. If the computer drew the
    /// player's own card it draws again; the new card goes on display but
    /// the round is still scored against the first draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket's round was reset, or the computer has
    /// not drawn yet.
    pub fn resolve(&self, ticket: RoundTicket) -> Result<RoundResolution, StepError> {
        let mut round = self.round.lock();
        round.check(ticket, RoundPhase::ComputerDrawing)?;

        let player = Card::from_id(ticket.card);
        let computer = round.state.computer_card;

        let redraw = match computer {
            Some(drawn) if is_identity_tie(&player, &drawn) => {
                let redraw = self.draw_computer_card();
                warn!(card = %drawn, redraw = ?redraw, "computer drew the player's card");
                redraw
            }
            _ => None,
        };
        if redraw.is_some() {
            round.state.computer_card = redraw;
        }

        let outcome = compare(Some(&player), computer.as_ref());

        let mut history = self.history.lock();
        let resolution = RoundResolution {
            round: history.len() + 1,
            player_card: player,
            computer_card: computer,
            redraw,
            outcome,
        };
        history.insert(0, resolution.history_entry());
        drop(history);

        round.state.outcome = Some(outcome);
        round.state.is_over = true;
        round.state.revealed_card = None;
        round.state.phase = RoundPhase::Resolved;
        drop(round);

        info!(
            round = resolution.round,
            player = %player,
            computer = ?computer,
            outcome = ?outcome,
            "round resolved"
        );
        Ok(resolution)
    }

    /// Plays a whole round: select, wait, reveal, wait, resolve.
    ///
    /// The pauses use the configured reveal and compare delays.
    ///
    /// # Example
    ///
    /// ```
    /// use cardbattle::{Game, GameOptions, Immediate};
    ///
    /// let game = Game::new(GameOptions::instant(), 7);
    /// let resolution = game.play(13, &Immediate).unwrap();
    /// assert_eq!(resolution.player_card.to_string(), "A♠");
    /// assert_eq!(game.history().len(), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the selection is turned away, or the round is
    /// reset by another caller during one of the pauses.
    pub fn play(&self, card_id: u8, pacer: &impl Pacer) -> Result<RoundResolution, PlayError> {
        let ticket = self.select_card(card_id)?;
        pacer.pause(self.options.reveal_delay);
        self.reveal(ticket)?;
        pacer.pause(self.options.compare_delay);
        Ok(self.resolve(ticket)?)
    }
}

use cardbattle::{
    Card, Game, GameOptions, HistoryEntry, Outcome, RoundPhase, RoundResolution, RoundState,
    RoundTicket,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Round token handed to JS by [`WasmGame::select_card`].
///
/// Timers pass it back to `reveal` and `resolve`; a token from before a
/// restart or next round no longer advances anything.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct WasmTicket(RoundTicket);

#[wasm_bindgen]
impl WasmTicket {
    pub fn card_id(&self) -> u32 {
        u32::from(self.0.card().get())
    }
}

/// Browser-facing wrapper around [`Game`].
///
/// JS drives the delayed steps itself: `select_card` returns a ticket, then
/// after `reveal_delay_ms()` JS calls `reveal(ticket)`, and after
/// `compare_delay_ms()` it calls `resolve(ticket)`. Restarting in between
/// makes the pending steps no-ops.
#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    show_cards: bool,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
            show_cards: true,
        }
    }

    pub fn reveal_delay_ms(&self) -> u32 {
        self.game.options.reveal_delay.as_millis() as u32
    }

    pub fn compare_delay_ms(&self) -> u32 {
        self.game.options.compare_delay.as_millis() as u32
    }

    /// Returns the round ticket, or `undefined` for a rejected click.
    pub fn select_card(&self, card_id: u32) -> Option<WasmTicket> {
        let card_id = u8::try_from(card_id).ok()?;
        self.game.select_card(card_id).ok().map(WasmTicket)
    }

    /// Returns `false` when the ticket's round was reset or is not waiting on
    /// the reveal.
    pub fn reveal(&self, ticket: &WasmTicket) -> bool {
        self.game.reveal(ticket.0).is_ok()
    }

    /// Returns the resolution, or `null` when the ticket's round cannot be
    /// resolved.
    pub fn resolve(&self, ticket: &WasmTicket) -> Result<JsValue, JsValue> {
        match self.game.resolve(ticket.0) {
            Ok(resolution) => to_js_value(&JsResolution::from(resolution)),
            Err(_) => Ok(JsValue::NULL),
        }
    }

    pub fn next_round(&self) -> Result<(), JsValue> {
        self.game.next_round().map_err(js_err)
    }

    pub fn restart(&self) {
        self.game.restart();
    }

    pub fn toggle_cards(&mut self) -> bool {
        self.show_cards = !self.show_cards;
        self.show_cards
    }

    pub fn deck(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.deck_view(&self.game.round_state()))
    }

    pub fn round_state(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsRoundState::from(self.game.round_state()))
    }

    pub fn history(&self) -> Result<JsValue, JsValue> {
        to_js_value(&history_view(&self.game.history()))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.game.round_state();
        let snapshot = Snapshot {
            show_cards: self.show_cards,
            deck: self.deck_view(&state),
            round: JsRoundState::from(state),
            history: history_view(&self.game.history()),
        };
        to_js_value(&snapshot)
    }
}

impl WasmGame {
    fn deck_view(&self, state: &RoundState) -> Vec<JsDeckCard> {
        let can_select = self.game.can_select();
        self.game
            .deck()
            .into_iter()
            .map(|card| {
                let player_pick = state.player_card == Some(card);
                let computer_pick = state.computer_card == Some(card);
                let revealed = state.revealed_card == Some(card);
                let face_up = player_pick || computer_pick || revealed;
                JsDeckCard {
                    id: card.id().get(),
                    card: face_up.then(|| card_to_js(card)),
                    revealed,
                    player_pick,
                    computer_pick,
                    selectable: can_select && !player_pick && !computer_pick,
                }
            })
            .collect()
    }
}

#[derive(Serialize)]
struct Snapshot {
    show_cards: bool,
    deck: Vec<JsDeckCard>,
    round: JsRoundState,
    history: Vec<JsHistoryEntry>,
}

#[derive(Serialize)]
struct JsCard {
    id: u8,
    label: String,
    rank: &'static str,
    rank_value: u8,
    suit: &'static str,
    suit_power: u8,
    symbol: char,
    red: bool,
}

/// A deck slot; `card` is only filled in for face-up cards.
#[derive(Serialize)]
struct JsDeckCard {
    id: u8,
    card: Option<JsCard>,
    revealed: bool,
    player_pick: bool,
    computer_pick: bool,
    selectable: bool,
}

#[derive(Serialize)]
struct JsRoundState {
    phase: &'static str,
    revealed_card: Option<JsCard>,
    player_card: Option<JsCard>,
    computer_card: Option<JsCard>,
    outcome: Option<&'static str>,
    is_over: bool,
}

impl From<RoundState> for JsRoundState {
    fn from(state: RoundState) -> Self {
        Self {
            phase: phase_to_str(state.phase),
            revealed_card: state.revealed_card.map(card_to_js),
            player_card: state.player_card.map(card_to_js),
            computer_card: state.computer_card.map(card_to_js),
            outcome: state.outcome.map(Outcome::message),
            is_over: state.is_over,
        }
    }
}

#[derive(Serialize)]
struct JsHistoryEntry {
    round: u32,
    player_card: JsCard,
    computer_card: Option<JsCard>,
    outcome: &'static str,
}

impl From<HistoryEntry> for JsHistoryEntry {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            round: entry.round as u32,
            player_card: card_to_js(entry.player_card),
            computer_card: entry.computer_card.map(card_to_js),
            outcome: entry.outcome.message(),
        }
    }
}

#[derive(Serialize)]
struct JsResolution {
    round: u32,
    player_card: JsCard,
    computer_card: Option<JsCard>,
    redraw: Option<JsCard>,
    outcome: &'static str,
}

impl From<RoundResolution> for JsResolution {
    fn from(resolution: RoundResolution) -> Self {
        Self {
            round: resolution.round as u32,
            player_card: card_to_js(resolution.player_card),
            computer_card: resolution.computer_card.map(card_to_js),
            redraw: resolution.redraw.map(card_to_js),
            outcome: resolution.outcome.message(),
        }
    }
}

fn history_view(history: &[HistoryEntry]) -> Vec<JsHistoryEntry> {
    history.iter().copied().map(JsHistoryEntry::from).collect()
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        id: card.id().get(),
        label: card.to_string(),
        rank: card.rank.label(),
        rank_value: card.rank_value(),
        suit: card.suit.name(),
        suit_power: card.suit_power(),
        symbol: card.suit.symbol(),
        red: card.suit.is_red(),
    }
}

fn phase_to_str(phase: RoundPhase) -> &'static str {
    match phase {
        RoundPhase::Idle => "Idle",
        RoundPhase::PlayerSelecting => "PlayerSelecting",
        RoundPhase::ComputerDrawing => "ComputerDrawing",
        RoundPhase::Resolved => "Resolved",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

use hilo::{
    Card, Controls, Direction, Game, GameOptions, GuessOutcome, InputAdapter, Message, Phase, Suit,
    View,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    input: InputAdapter,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        let game = Game::new(GameOptions::default(), seed as u64);
        let input = InputAdapter::new(game.options().keymap);
        Self { game, input }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game.reset(seed as u64);
    }

    pub fn guess_higher(&mut self) -> Result<JsValue, JsValue> {
        self.guess(Direction::Higher)
    }

    pub fn guess_lower(&mut self) -> Result<JsValue, JsValue> {
        self.guess(Direction::Lower)
    }

    /// Handles a `keydown` key. Only guess keys are handled, and only while
    /// the guess controls are shown; returns `null` for ignored keys.
    pub fn key_down(&mut self, key: &str) -> Result<JsValue, JsValue> {
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Ok(JsValue::NULL);
        };
        if self.game.phase() != Phase::Guessing {
            return Ok(JsValue::NULL);
        }

        let keys = self.input.bind_guess_keys();
        match keys.handle(&mut self.game, c) {
            Some(result) => {
                let outcome = result.map_err(js_err)?;
                to_js_value(&JsOutcome::from(outcome))
            }
            None => Ok(JsValue::NULL),
        }
    }

    /// Advances to the next round. Returns `true` when the game is over.
    pub fn advance(&mut self) -> Result<bool, JsValue> {
        self.game
            .advance()
            .map(|phase| phase == Phase::Finished)
            .map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&Snapshot::from(self.game.view()))
    }
}

impl WasmGame {
    fn guess(&mut self, direction: Direction) -> Result<JsValue, JsValue> {
        let outcome = self.game.guess(direction).map_err(js_err)?;
        to_js_value(&JsOutcome::from(outcome))
    }
}

#[derive(Serialize)]
struct Snapshot {
    current: JsCard,
    pending: Option<JsCard>,
    message: Vec<String>,
    outcome: Option<&'static str>,
    controls: &'static str,
    buttons: Vec<&'static str>,
    cards_remaining: u32,
    wins: u32,
    losses: u32,
}

impl From<View> for Snapshot {
    fn from(view: View) -> Self {
        Self {
            current: card_to_js(view.current),
            pending: view.pending.map(card_to_js),
            message: view.message.to_string().lines().map(String::from).collect(),
            outcome: outcome_to_str(view.message),
            controls: controls_to_str(view.controls),
            buttons: view.controls.labels().to_vec(),
            cards_remaining: view.cards_remaining as u32,
            wins: view.wins,
            losses: view.losses,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    symbol: &'static str,
    rank: &'static str,
    value: u8,
}

#[derive(Serialize)]
struct JsOutcome {
    direction: &'static str,
    current: JsCard,
    drawn: JsCard,
    correct: bool,
}

impl From<GuessOutcome> for JsOutcome {
    fn from(outcome: GuessOutcome) -> Self {
        Self {
            direction: direction_to_str(outcome.direction),
            current: card_to_js(outcome.current),
            drawn: card_to_js(outcome.drawn),
            correct: outcome.correct,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        symbol: card.suit.symbol(),
        rank: card.rank.symbol(),
        value: card.value(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "Spades",
        Suit::Clubs => "Clubs",
        Suit::Diamonds => "Diamonds",
        Suit::Hearts => "Hearts",
    }
}

fn direction_to_str(direction: Direction) -> &'static str {
    match direction {
        Direction::Higher => "Higher",
        Direction::Lower => "Lower",
    }
}

fn outcome_to_str(message: Message) -> Option<&'static str> {
    match message {
        Message::Win => Some("Win"),
        Message::Lose => Some("Lose"),
        Message::Prompt | Message::Finished { .. } => None,
    }
}

fn controls_to_str(controls: Controls) -> &'static str {
    match controls {
        Controls::Guess => "Guess",
        Controls::Progress { last_round: false } => "Next",
        Controls::Progress { last_round: true } => "Finish",
        Controls::Hidden => "Hidden",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

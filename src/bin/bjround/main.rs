//! Terminal blackjack.

mod config;

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use bjround::{
    ActionError, Card, DealerHand, FileBankroll, GameOptions, Hand, Outcome, Phase, Rank, Round,
    RoundResult, Suit, Table, TableError,
};
use pico_args::Arguments;

use config::{BALANCE_FILE_ENV, Config, HELP};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut pargs = Arguments::from_env();
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config = Config::from_args(pargs, std::env::var_os(BALANCE_FILE_ENV))?;
    let bankroll = FileBankroll::new(&config.balance_file)
        .with_default_balance(config.starting_balance);
    let mut table = Table::open(bankroll, config.options).with_context(|| {
        format!(
            "failed to open balance file {}",
            config.balance_file.display()
        )
    })?;
    let mut seeds = Seeds::new(config.seed);

    loop {
        println!("\n== Blackjack ==  balance {}", table.balance());
        println!("[p]lay  [i]nfo  [e]xit");
        let Some(choice) = prompt_line("> ")? else {
            break;
        };

        match choice.as_str() {
            "p" | "play" => play(&mut table, &mut seeds)?,
            "i" | "info" => print_info(table.options()),
            "e" | "exit" | "q" | "quit" => break,
            _ => println!("Unknown choice."),
        }
    }

    println!("Goodbye.");
    Ok(())
}

/// Hands out one shuffle seed per round.
struct Seeds {
    base: Option<u64>,
    rounds: u64,
}

impl Seeds {
    const fn new(base: Option<u64>) -> Self {
        Self { base, rounds: 0 }
    }

    fn next_seed(&mut self) -> u64 {
        let seed = self.base.map_or_else(
            || {
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_nanos() as u64
            },
            |base| base.wrapping_add(self.rounds),
        );
        self.rounds += 1;
        seed
    }
}

/// Plays rounds until the player goes back to the menu or runs out of money.
fn play(table: &mut Table<FileBankroll>, seeds: &mut Seeds) -> Result<()> {
    loop {
        let balance = table.balance();
        if balance == 0 {
            println!("You are out of money. Game over.");
            return Ok(());
        }

        table.start_round(seeds.next_seed());

        loop {
            let Some(input) = prompt_line(&format!("Bid amount (1-{balance}, m for menu): "))?
            else {
                table.leave_round();
                return Ok(());
            };
            if matches!(input.as_str(), "m" | "menu" | "q" | "quit") {
                table.leave_round();
                return Ok(());
            }

            let Ok(amount) = input.parse::<i64>() else {
                println!("Please enter a number.");
                continue;
            };

            match table.place_bid(amount) {
                Ok(()) => break,
                Err(TableError::Bid(err)) if err.is_invalid_bid() => println!("{err}"),
                Err(err) => return Err(err).context("bid failed"),
            }
        }

        while let Some(round) = table.round().filter(|round| round.phase() == Phase::PlayerTurn) {
            print_table(round);
            println!("{}", format_actions(round));

            let Some(action) = prompt_line("Action: ")? else {
                table.leave_round();
                return Ok(());
            };

            let result = match action.as_str() {
                "h" | "hit" => table.hit().map(|card| println!("You draw the {card}.")),
                "s" | "stand" => table.stand().map(|_| ()),
                "d" | "double" => table.double_down().map(|card| match card {
                    Some(card) => println!("Bid doubled. You draw the {card}."),
                    None => println!("You cannot double down now."),
                }),
                "m" | "menu" | "q" | "quit" => {
                    table.leave_round();
                    println!("Round abandoned. Your bid was not charged.");
                    return Ok(());
                }
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match result {
                Ok(()) => {}
                Err(TableError::Action(ActionError::ExhaustedDeck(_))) => {
                    println!("The deck ran out. Round abandoned.");
                }
                Err(err) => return Err(err).context("action failed"),
            }
        }

        if let Some(round) = table.round() {
            if let Some(result) = round.result() {
                print_table(round);
                print_result(&result);
            }
        }
    }
}

fn print_info(options: &GameOptions) {
    println!("\nBlackjack\n");
    println!("Beat the dealer without going over 21.");
    println!("Face cards count 10, aces count 11 or 1.");
    println!(
        "The dealer draws below {}. A two-card 21 pays {}x the bid.",
        options.dealer_stands_on, options.blackjack_pays
    );
    println!("Leaving a round before it ends costs nothing.");
    println!("\nVersion: {}", env!("CARGO_PKG_VERSION"));
}

fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_lowercase()))
}

fn print_table(round: &Round) {
    let dealer = round.dealer_hand();
    let dealer_value = dealer
        .value()
        .map_or_else(|| format!("{} showing", dealer.visible_value()), |v| v.to_string());
    println!("\nDealer: {} (value {dealer_value})", format_dealer(dealer));

    let hand = round.player_hand();
    println!(
        "You:    {} | value {} | bid {}{}",
        format_hand(hand),
        hand.value(),
        round.bid(),
        if round.is_bid_doubled() { " (doubled)" } else { "" }
    );
}

fn print_result(result: &RoundResult) {
    let message = match result.outcome {
        Outcome::PlayerBust => "Bust! You lose.",
        Outcome::DealerBust => "Dealer busts! You win.",
        Outcome::Blackjack => "Blackjack!",
        Outcome::PlayerWins => "You win!",
        Outcome::DealerWins => "Dealer wins.",
        Outcome::Tie => "It's a tie.",
    };
    println!("\n{message} Payout {:+}, balance {}.", result.payout, result.balance);
}

fn format_actions(round: &Round) -> String {
    let parts = [
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("double", "d", round.can_double_down()),
        format_action("menu", "m", true),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    let mut parts = Vec::with_capacity(dealer.len());
    if !dealer.is_hole_revealed() {
        parts.push("??".to_string());
    }
    parts.extend(dealer.visible_cards().iter().map(format_card));
    parts.join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A".to_string(),
        Rank::King => "K".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::Jack => "J".to_string(),
        numeric => numeric.to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

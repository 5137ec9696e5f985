use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Spoiler log fixture: two slots, a surrounding report, and a playthrough
/// with a nested-brace location and a repeated item.
pub const SPOILER_LOG: &str = "\
Archipelago Version 0.5.1  -  Seed: 8472910

Game:                            Zelda
Player 1: Alice
Player 2: Bob

Locations:

Chest (Alice): Key (Bob)

Playthrough:

0: {
  Links House (Alice)
  Ship (Bob)
}
1: {
  Chest (Alice): Key (Bob)
  Crateria {Upper} (Bob): Bombs (Alice)
}

2: {
  Door (Bob): Key (Alice)
  Sanctuary (Alice): Progressive_Sword.2 (Bob)
}
3: {
  Vent (Bob): Bombs (Alice)
  Pot (Upper) (Alice): Morph Ball (Bob)
}

Paths:

Triforce (Alice): ...
";

pub fn spoiler_lines() -> Vec<String> {
    SPOILER_LOG.lines().map(str::to_string).collect()
}

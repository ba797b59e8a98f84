//! Builtin tag packs compiled into the binary.
//!
//! Three curated packs ship with the crate: `smileys`, `gestures`, and
//! `symbols`. Table order is deliberate and load-bearing: the dictionary
//! preserves it and the matcher ranks by it, so the entries a pack lists
//! first are the candidates users see first. Hosts pin suggestion counts in
//! their UI tests, which makes the composition of these tables part of the
//! public contract; grow them at the end of a table, not in the middle.
//!
//! Tags are stored lowercased. Candidates may be multi-scalar grapheme
//! clusters (variation selectors, ZWJ sequences, skin-tone modifiers);
//! hosts must treat a committed candidate as one unit when editing around
//! it.

use phf::phf_map;
use quicktag_core::{PackId, SourcePack};

/// Id of the builtin smiley-and-creature pack.
pub const SMILEYS: &str = "smileys";
/// Id of the builtin hand-gesture pack.
pub const GESTURES: &str = "gestures";
/// Id of the builtin hearts-and-symbols pack.
pub const SYMBOLS: &str = "symbols";

type Table = &'static [(&'static str, &'static str)];

const SMILEYS_TABLE: Table = &[
    ("grinning face", "😀"),
    ("grinning face with big eyes", "😃"),
    ("grinning face with smiling eyes", "😄"),
    ("beaming face with smiling eyes", "😁"),
    ("grinning squinting face", "😆"),
    ("grinning face with sweat", "😅"),
    ("rolling on the floor laughing", "🤣"),
    ("face with tears of joy", "😂"),
    ("slightly smiling face", "🙂"),
    ("upside-down face", "🙃"),
    ("melting face", "🫠"),
    ("winking face", "😉"),
    ("smiling face with smiling eyes", "😊"),
    ("smiling face with halo", "😇"),
    ("smiling face with hearts", "🥰"),
    ("smiling face with heart-eyes", "😍"),
    ("star-struck", "🤩"),
    ("face blowing a kiss", "😘"),
    ("kissing face", "😗"),
    ("smiling face", "☺️"),
    ("kissing face with closed eyes", "😚"),
    ("kissing face with smiling eyes", "😙"),
    ("smiling face with tear", "🥲"),
    ("face savoring food", "😋"),
    ("face with tongue", "😛"),
    ("winking face with tongue", "😜"),
    ("zany face", "🤪"),
    ("squinting face with tongue", "😝"),
    ("money-mouth face", "🤑"),
    ("hugging face", "🤗"),
    ("face with hand over mouth", "🤭"),
    ("face with open eyes and hand over mouth", "🫢"),
    ("face with peeking eye", "🫣"),
    ("shushing face", "🤫"),
    ("thinking face", "🤔"),
    ("saluting face", "🫡"),
    ("zipper-mouth face", "🤐"),
    ("face with raised eyebrow", "🤨"),
    ("neutral face", "😐"),
    ("expressionless face", "😑"),
    ("face without mouth", "😶"),
    ("dotted line face", "🫥"),
    ("face in clouds", "😶‍🌫️"),
    ("smirking face", "😏"),
    ("unamused face", "😒"),
    ("face with rolling eyes", "🙄"),
    ("grimacing face", "😬"),
    ("face exhaling", "😮‍💨"),
    ("lying face", "🤥"),
    ("shaking face", "🫨"),
    ("relieved face", "😌"),
    ("pensive face", "😔"),
    ("sleepy face", "😪"),
    ("drooling face", "🤤"),
    ("sleeping face", "😴"),
    ("face with medical mask", "😷"),
    ("face with thermometer", "🤒"),
    ("face with head-bandage", "🤕"),
    ("nauseated face", "🤢"),
    ("face vomiting", "🤮"),
    ("sneezing face", "🤧"),
    ("hot face", "🥵"),
    ("cold face", "🥶"),
    ("woozy face", "🥴"),
    ("face with crossed-out eyes", "😵"),
    ("face with spiral eyes", "😵‍💫"),
    ("exploding head", "🤯"),
    ("cowboy hat face", "🤠"),
    ("partying face", "🥳"),
    ("disguised face", "🥸"),
    ("smiling face with sunglasses", "😎"),
    ("nerd face", "🤓"),
    ("face with monocle", "🧐"),
    ("confused face", "😕"),
    ("face with diagonal mouth", "🫤"),
    ("worried face", "😟"),
    ("slightly frowning face", "🙁"),
    ("frowning face", "☹️"),
    ("face with open mouth", "😮"),
    ("hushed face", "😯"),
    ("astonished face", "😲"),
    ("flushed face", "😳"),
    ("pleading face", "🥺"),
    ("face holding back tears", "🥹"),
    ("frowning face with open mouth", "😦"),
    ("anguished face", "😧"),
    ("fearful face", "😨"),
    ("anxious face with sweat", "😰"),
    ("sad but relieved face", "😥"),
    ("crying face", "😢"),
    ("loudly crying face", "😭"),
    ("face screaming in fear", "😱"),
    ("confounded face", "😖"),
    ("persevering face", "😣"),
    ("disappointed face", "😞"),
    ("downcast face with sweat", "😓"),
    ("weary face", "😩"),
    ("tired face", "😫"),
    ("yawning face", "🥱"),
    ("face with steam from nose", "😤"),
    ("pouting face", "😡"),
    ("angry face", "😠"),
    ("face with symbols on mouth", "🤬"),
    ("smiling face with horns", "😈"),
    ("angry face with horns", "👿"),
    ("skull", "💀"),
    ("clown face", "🤡"),
    ("pile of poo", "💩"),
    ("ghost", "👻"),
    ("alien", "👽"),
    ("robot face", "🤖"),
    ("smiling cat face with open mouth", "😺"),
    ("grinning cat face with smiling eyes", "😸"),
    ("cat face with tears of joy", "😹"),
    ("smiling cat face with heart-eyes", "😻"),
    ("cat face with wry smile", "😼"),
    ("kissing cat face", "😽"),
    ("weary cat face", "🙀"),
    ("crying cat face", "😿"),
    ("pouting cat face", "😾"),
    ("see-no-evil monkey", "🙈"),
    ("hear-no-evil monkey", "🙉"),
    ("speak-no-evil monkey", "🙊"),
    ("monkey face", "🐵"),
    ("dog face", "🐶"),
    ("wolf face", "🐺"),
    ("fox face", "🦊"),
    ("cat face", "🐱"),
    ("lion face", "🦁"),
    ("tiger face", "🐯"),
    ("horse face", "🐴"),
    ("cow face", "🐮"),
    ("pig face", "🐷"),
    ("mouse face", "🐭"),
    ("hamster face", "🐹"),
    ("rabbit face", "🐰"),
    ("bear face", "🐻"),
    ("panda face", "🐼"),
    ("frog face", "🐸"),
    ("new moon face", "🌚"),
];

const GESTURES_TABLE: Table = &[
    ("waving hand", "👋"),
    ("raised back of hand", "🤚"),
    ("hand with fingers splayed", "🖐️"),
    ("raised hand", "✋"),
    ("vulcan salute", "🖖"),
    ("ok hand", "👌"),
    ("pinched fingers", "🤌"),
    ("pinching hand", "🤏"),
    ("victory hand", "✌️"),
    ("crossed fingers", "🤞"),
    ("love-you gesture", "🤟"),
    ("sign of the horns", "🤘"),
    ("call me hand", "🤙"),
    ("backhand index pointing left", "👈"),
    ("backhand index pointing right", "👉"),
    ("backhand index pointing up", "👆"),
    ("backhand index pointing down", "👇"),
    ("middle finger", "🖕"),
    ("index pointing up", "☝️"),
    ("thumbs up", "👍"),
    ("thumbs down", "👎"),
    ("raised fist", "✊"),
    ("oncoming fist", "👊"),
    ("clapping hands", "👏"),
    ("raising hands", "🙌"),
    ("open hands", "👐"),
    ("palms up together", "🤲"),
    ("handshake", "🤝"),
    ("folded hands", "🙏"),
    ("writing hand", "✍️"),
    ("nail polish", "💅"),
    ("selfie", "🤳"),
    ("flexed biceps", "💪"),
    ("waving hand light skin tone", "👋🏻"),
    ("thumbs up medium skin tone", "👍🏽"),
    ("raised fist dark skin tone", "✊🏿"),
];

const SYMBOLS_TABLE: Table = &[
    ("red heart", "❤️"),
    ("orange heart", "🧡"),
    ("yellow heart", "💛"),
    ("green heart", "💚"),
    ("blue heart", "💙"),
    ("purple heart", "💜"),
    ("brown heart", "🤎"),
    ("black heart", "🖤"),
    ("white heart", "🤍"),
    ("broken heart", "💔"),
    ("heart exclamation", "❣️"),
    ("two hearts", "💕"),
    ("revolving hearts", "💞"),
    ("beating heart", "💓"),
    ("growing heart", "💗"),
    ("sparkling heart", "💖"),
    ("heart with arrow", "💘"),
    ("heart with ribbon", "💝"),
    ("heart decoration", "💟"),
    ("hundred points", "💯"),
    ("anger symbol", "💢"),
    ("collision", "💥"),
    ("dizzy", "💫"),
    ("sweat droplets", "💦"),
    ("dashing away", "💨"),
    ("speech balloon", "💬"),
    ("thought balloon", "💭"),
    ("zzz", "💤"),
    ("fire", "🔥"),
    ("sparkles", "✨"),
    ("star", "⭐"),
    ("glowing star", "🌟"),
    ("crescent moon", "🌙"),
    ("rainbow", "🌈"),
    ("party popper", "🎉"),
    ("confetti ball", "🎊"),
    ("balloon", "🎈"),
    ("wrapped gift", "🎁"),
    ("trophy", "🏆"),
    ("crown", "👑"),
    ("gem stone", "💎"),
    ("check mark button", "✅"),
    ("cross mark", "❌"),
    ("warning", "⚠️"),
    ("white flag", "🏳️"),
    ("rainbow flag", "🏳️‍🌈"),
    ("pirate flag", "🏴‍☠️"),
];

static BUILTIN: phf::Map<&'static str, Table> = phf_map! {
    "smileys" => SMILEYS_TABLE,
    "gestures" => GESTURES_TABLE,
    "symbols" => SYMBOLS_TABLE,
};

/// Look up a builtin pack by id.
pub fn builtin_pack(id: &PackId) -> Option<SourcePack> {
    BUILTIN
        .get(id.as_str())
        .map(|table| SourcePack::from_table(id.clone(), table))
}

/// Ids of all builtin packs, sorted for stable display.
pub fn builtin_ids() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = BUILTIN.keys().copied().collect();
    ids.sort_unstable();
    ids
}

/// The pack set enabled by default, in ranking order.
pub fn default_pack_ids() -> Vec<PackId> {
    vec![PackId::from(SMILEYS), PackId::from(GESTURES), PackId::from(SYMBOLS)]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

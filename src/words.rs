//! Static word dictionaries backing the name generator.
//!
//! These are data, not logic: two fixed finite sets sampled uniformly by
//! [`crate::generator::NameGenerator`]. Entries are lowercase single words so
//! a generated `adjective-animal` pair always splits into exactly two
//! segments on `-`.

pub const ADJECTIVES: &[&str] = &[
    "able", "agile", "amber", "ancient", "arctic", "autumn", "azure", "bold",
    "brave", "breezy", "bright", "bronze", "calm", "candid", "cheerful",
    "chilly", "clever", "cobalt", "cosmic", "coral", "cozy", "crimson",
    "curious", "daring", "dapper", "dawn", "deep", "dusty", "eager", "early",
    "electric", "elegant", "emerald", "fancy", "fearless", "fierce", "floral",
    "fluffy", "frosty", "gentle", "giant", "gilded", "glad", "golden",
    "graceful", "grand", "happy", "hazel", "hidden", "honest", "humble",
    "icy", "indigo", "ivory", "jade", "jolly", "keen", "kind", "lively",
    "lucky", "lunar", "magic", "mellow", "merry", "mighty", "misty", "modest",
    "noble", "northern", "olive", "opal", "orange", "patient", "peaceful",
    "plucky", "polished", "proud", "purple", "quick", "quiet", "radiant",
    "rapid", "restless", "royal", "ruby", "rustic", "scarlet", "serene",
    "shiny", "silent", "silver", "sleek", "smooth", "snowy", "solar",
    "spry", "steady", "stellar", "stormy", "sturdy", "sunny", "swift",
    "tender", "tidy", "tranquil", "trusty", "velvet", "vivid", "wandering",
    "warm", "wild", "wise", "witty", "young", "zesty",
];

pub const ANIMALS: &[&str] = &[
    "albatross", "antelope", "armadillo", "badger", "barracuda", "bat",
    "bear", "beaver", "bison", "bobcat", "buffalo", "butterfly", "camel",
    "capybara", "caribou", "cheetah", "chinchilla", "chipmunk", "cobra",
    "condor", "cougar", "coyote", "crane", "cricket", "crow", "deer",
    "dingo", "dolphin", "donkey", "dove", "dragonfly", "duck", "eagle",
    "elephant", "elk", "falcon", "ferret", "finch", "firefly", "flamingo",
    "fox", "gazelle", "gecko", "gibbon", "giraffe", "goose", "gopher",
    "grouse", "hare", "hawk", "hedgehog", "heron", "hippo", "hornet",
    "horse", "hummingbird", "hyena", "ibex", "iguana", "jackal", "jaguar",
    "jay", "kangaroo", "kestrel", "kingfisher", "koala", "lemur", "leopard",
    "lion", "lizard", "llama", "lobster", "lynx", "magpie", "manatee",
    "marmot", "meerkat", "mole", "moose", "narwhal", "newt", "ocelot",
    "octopus", "orca", "osprey", "otter", "owl", "panda", "pangolin",
    "panther",
    "parrot", "pelican", "penguin", "pheasant", "porcupine", "puffin",
    "quail", "rabbit", "raccoon", "raven", "reindeer", "salamander",
    "seal", "sparrow", "squid", "squirrel", "starling", "stoat", "swan",
    "tapir", "tiger", "toucan", "turtle", "viper", "vole", "walrus",
    "weasel", "wolf", "wolverine", "wombat", "wren", "yak", "zebra",
];

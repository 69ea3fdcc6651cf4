// Compact English n-gram log-likelihoods used when no table file is given.

pub const BIGRAM_LOGS: &[(&str, f64)] = &[
    ("th", -1.94), ("he", -2.06), ("in", -2.36), ("er", -2.48), ("an", -2.52),
    ("re", -2.56), ("on", -2.62), ("at", -2.77), ("en", -2.81), ("nd", -2.88),
    ("ti", -2.89), ("es", -2.89), ("or", -2.95), ("te", -3.02), ("of", -3.05),
    ("ed", -3.05), ("is", -3.09), ("it", -3.11), ("al", -3.14), ("ar", -3.17),
    ("st", -3.19), ("to", -3.20), ("nt", -3.20), ("ng", -3.29), ("ve", -3.32),
    ("se", -3.32), ("ha", -3.32), ("as", -3.39), ("ou", -3.39), ("io", -3.44),
    ("le", -3.46), ("co", -3.52), ("me", -3.54), ("de", -3.56), ("hi", -3.58),
    ("ri", -3.60), ("ro", -3.62), ("ic", -3.64), ("ne", -3.66), ("ea", -3.68),
    ("ra", -3.70), ("ce", -3.72), ("li", -3.74), ("ch", -3.76), ("om", -3.78),
    ("ll", -3.80), ("ma", -3.82), ("el", -3.84), ("ur", -3.86), ("ns", -3.88),
    ("be", -3.90), ("il", -3.92), ("di", -3.94), ("ho", -3.96), ("pe", -3.98),
    ("ec", -4.00), ("pr", -4.02), ("no", -4.04), ("ct", -4.06), ("us", -4.08),
    ("ac", -4.10), ("ow", -4.12), ("ly", -4.14), ("id", -4.16), ("ot", -4.18),
    ("ca", -4.20), ("ts", -4.22), ("so", -4.24), ("wa", -4.26), ("si", -4.28),
];

pub const TRIGRAM_LOGS: &[(&str, f64)] = &[
    ("the", -2.56), ("and", -3.27), ("ing", -3.54), ("ion", -3.63), ("tio", -3.65),
    ("ent", -3.67), ("ati", -3.69), ("for", -3.72), ("her", -3.80), ("ter", -3.83),
    ("hat", -3.86), ("tha", -3.86), ("ere", -3.92), ("ate", -3.98), ("his", -4.00),
    ("con", -4.04), ("res", -4.06), ("ver", -4.08), ("all", -4.12), ("ons", -4.14),
    ("nce", -4.16), ("men", -4.18), ("ith", -4.20), ("ted", -4.22), ("ers", -4.24),
    ("pro", -4.26), ("thi", -4.28), ("wit", -4.30), ("are", -4.32), ("ess", -4.34),
    ("not", -4.36), ("ive", -4.38), ("was", -4.40), ("ect", -4.42), ("rea", -4.44),
    ("com", -4.46), ("eve", -4.48), ("per", -4.50), ("int", -4.52), ("est", -4.54),
    ("sta", -4.56), ("cti", -4.58), ("ica", -4.60), ("ist", -4.62), ("ear", -4.64),
    ("ain", -4.66), ("one", -4.68), ("our", -4.70), ("iti", -4.72), ("rat", -4.74),
    ("der", -4.76), ("man", -4.78), ("tiv", -4.80), ("ort", -4.82), ("ble", -4.84),
    ("ave", -4.86), ("cal", -4.88), ("tin", -4.90), ("but", -4.92), ("out", -4.94),
    ("ine", -4.96), ("par", -4.98), ("own", -5.00), ("can", -5.02), ("ant", -5.04),
];

pub const QUADGRAM_LOGS: &[(&str, f64)] = &[
    ("tion", -3.00), ("atio", -3.20), ("that", -3.40), ("ever", -3.50), ("from", -3.60),
    ("with", -3.70), ("have", -3.80), ("ment", -3.90), ("this", -4.00), ("ther", -4.10),
    ("here", -4.20), ("ould", -4.30), ("ough", -4.40), ("ight", -4.50), ("over", -4.60),
    ("pres", -4.70), ("stan", -4.80), ("comp", -4.90), ("were", -5.00), ("said", -5.10),
    ("also", -5.20), ("when", -5.30), ("then", -5.40), ("they", -5.50), ("some", -5.60),
    ("into", -5.70), ("make", -5.80), ("made", -5.90), ("good", -6.00), ("want", -6.10),
    ("test", -4.00), ("text", -4.10), ("word", -4.20), ("what", -4.30), ("will", -4.40),
    ("your", -4.50), ("such", -4.60), ("much", -4.70), ("even", -4.80), ("more", -4.90),
    ("only", -5.00), ("well", -5.10), ("like", -5.20), ("just", -5.30), ("time", -5.40),
    ("year", -5.50), ("been", -5.60), ("cont", -5.70), ("comm", -5.80), ("syst", -5.90),
    ("anal", -6.00), ("requ", -3.50), ("show", -4.00), ("case", -4.10), ("clai", -4.20),
];

//! The standard canon.
//!
//! Sixty-six books in canonical order, each with the abbreviations and
//! spelled-out ordinal forms people commonly type.

/// Canonical name and aliases for every book, in canonical order.
pub const BOOKS: &[(&str, &[&str])] = &[
    ("Genesis", &["Gn", "Gs", "Gen", "Gns"]),
    ("Exodus", &["Exod", "Ex", "Exo"]),
    ("Leviticus", &["Lv", "Lev"]),
    ("Numbers", &["Nu", "Num"]),
    ("Deuteronomy", &["Dt", "Deut"]),
    ("Joshua", &["Josh"]),
    ("Judges", &["Judg"]),
    ("Ruth", &[]),
    ("1 Samuel", &["1 Sm", "1 Sam", "1st Sam", "1st Samuel", "First Samuel"]),
    ("2 Samuel", &["2 Sm", "2 Sam", "2nd Sam", "2nd Samuel", "Second Samuel"]),
    ("1 Kings", &["1 Ki", "1 Kgs", "1st Kgs", "1st Kings", "First Kings"]),
    ("2 Kings", &["2 Ki", "2 Kgs", "2nd Kgs", "2nd Kings", "Second Kings"]),
    ("1 Chronicles", &["1 Ch", "1 Chr", "1st Chr", "1st Chronicles", "First Chronicles"]),
    ("2 Chronicles", &["2 Ch", "2 Chr", "2nd Chr", "2nd Chronicles", "Second Chronicles"]),
    ("Ezra", &["Ezr"]),
    ("Nehemiah", &["Ne", "Neh"]),
    ("Esther", &["Esth", "Est"]),
    ("Job", &[]),
    ("Psalms", &["Ps", "Pss", "Psalm"]),
    ("Proverbs", &["Pr", "Prov", "Pro"]),
    ("Ecclesiastes", &["Ec", "Eccl", "Ecc"]),
    ("Song of Solomon", &["Song", "Song of Songs"]),
    ("Isaiah", &["Is", "Isa"]),
    ("Jeremiah", &["Jer"]),
    ("Lamentations", &["Lam"]),
    ("Ezekiel", &["Ezk", "Ezek"]),
    ("Daniel", &["Dn", "Dan"]),
    ("Hosea", &["Ho", "Hos"]),
    ("Joel", &["Jl"]),
    ("Amos", &["Am"]),
    ("Obadiah", &["Obad", "Ob", "Oba"]),
    ("Jonah", &["Jon"]),
    ("Micah", &["Mc", "Mi", "Mic"]),
    ("Nahum", &["Nah"]),
    ("Habakkuk", &["Hab"]),
    ("Zephaniah", &["Zp", "Zeph"]),
    ("Haggai", &["Hg", "Hag"]),
    ("Zechariah", &["Zc", "Zech"]),
    ("Malachi", &["Mal"]),
    ("Matthew", &["Mt", "Matt"]),
    ("Mark", &["Mk"]),
    ("Luke", &["Lk"]),
    ("John", &["Jn"]),
    ("Acts", &["Ac"]),
    ("Romans", &["Ro", "Rm", "Rom"]),
    ("1 Corinthians", &["1 Cor", "1st Cor", "1st Corinthians", "First Corinthians"]),
    ("2 Corinthians", &["2 Cor", "2nd Cor", "2nd Corinthians", "Second Corinthians"]),
    ("Galatians", &["Gal"]),
    ("Ephesians", &["Eph"]),
    ("Philippians", &["Ph", "Phil"]),
    ("Colossians", &["Col"]),
    ("1 Thessalonians", &["1 Th", "1 Thess", "1st Thess", "1st Thessalonians", "First Thessalonians"]),
    ("2 Thessalonians", &["2 Th", "2 Thess", "2nd Thess", "2nd Thessalonians", "Second Thessalonians"]),
    ("1 Timothy", &["1 Tim", "1st Tim", "1st Timothy", "First Timothy"]),
    ("2 Timothy", &["2 Tim", "2nd Tim", "2nd Timothy", "Second Timothy"]),
    ("Titus", &["Tit"]),
    ("Philemon", &["Phlm"]),
    ("Hebrews", &["Heb"]),
    ("James", &["Ja", "Jas"]),
    ("1 Peter", &["1 Pt", "1 Pet", "1st Pet", "1st Peter", "First Peter"]),
    ("2 Peter", &["2 Pt", "2 Pet", "2nd Pet", "2nd Peter", "Second Peter"]),
    ("1 John", &["1 Jn", "1st Jn", "1st John", "First John"]),
    ("2 John", &["2 Jn", "2nd Jn", "2nd John", "Second John"]),
    ("3 John", &["3 Jn", "3rd Jn", "3rd John", "Third John"]),
    ("Jude", &[]),
    ("Revelation", &["Rv", "Rev"]),
];

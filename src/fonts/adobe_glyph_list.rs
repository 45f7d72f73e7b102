//! Adobe Glyph List: glyph name -> Unicode code point.
//!
//! Used to resolve a simple font's `/Encoding /Differences` glyph names (and
//! built-in encodings) to Unicode when no `/ToUnicode` CMap overrides them.
//! This is a curated subset of the official AGL (basic Latin, digits,
//! standard punctuation/symbols, common accented letters, ligatures, and
//! currency signs) rather than its full ~4281-entry table; `uniXXXX`/`uXXXXX`
//! forms not covered here are handled separately by the caller.
//!
//! Reference: <https://github.com/adobe-type-tools/agl-aglfn>

use phf::phf_map;

pub static ADOBE_GLYPH_LIST: phf::Map<&'static str, char> = phf_map! {
    // Basic Latin letters
    "A" => 'A', "B" => 'B', "C" => 'C', "D" => 'D', "E" => 'E', "F" => 'F',
    "G" => 'G', "H" => 'H', "I" => 'I', "J" => 'J', "K" => 'K', "L" => 'L',
    "M" => 'M', "N" => 'N', "O" => 'O', "P" => 'P', "Q" => 'Q', "R" => 'R',
    "S" => 'S', "T" => 'T', "U" => 'U', "V" => 'V', "W" => 'W', "X" => 'X',
    "Y" => 'Y', "Z" => 'Z',
    "a" => 'a', "b" => 'b', "c" => 'c', "d" => 'd', "e" => 'e', "f" => 'f',
    "g" => 'g', "h" => 'h', "i" => 'i', "j" => 'j', "k" => 'k', "l" => 'l',
    "m" => 'm', "n" => 'n', "o" => 'o', "p" => 'p', "q" => 'q', "r" => 'r',
    "s" => 's', "t" => 't', "u" => 'u', "v" => 'v', "w" => 'w', "x" => 'x',
    "y" => 'y', "z" => 'z',

    // Digits
    "zero" => '0', "one" => '1', "two" => '2', "three" => '3', "four" => '4',
    "five" => '5', "six" => '6', "seven" => '7', "eight" => '8', "nine" => '9',

    // Whitespace and basic punctuation
    "space" => ' ', "exclam" => '!', "quotedbl" => '"', "numbersign" => '#',
    "dollar" => '$', "percent" => '%', "ampersand" => '&', "quotesingle" => '\'',
    "parenleft" => '(', "parenright" => ')', "asterisk" => '*', "plus" => '+',
    "comma" => ',', "hyphen" => '-', "period" => '.', "slash" => '/',
    "colon" => ':', "semicolon" => ';', "less" => '<', "equal" => '=',
    "greater" => '>', "question" => '?', "at" => '@',
    "bracketleft" => '[', "backslash" => '\\', "bracketright" => ']',
    "asciicircum" => '^', "underscore" => '_', "grave" => '`',
    "braceleft" => '{', "bar" => '|', "braceright" => '}', "asciitilde" => '~',

    // Dashes and common symbols
    "minus" => '\u{2212}', "endash" => '\u{2013}', "emdash" => '\u{2014}',
    "bullet" => '\u{2022}', "dagger" => '\u{2020}', "daggerdbl" => '\u{2021}',
    "ellipsis" => '\u{2026}', "periodcentered" => '\u{00B7}',
    "copyright" => '\u{00A9}', "registered" => '\u{00AE}', "trademark" => '\u{2122}',
    "degree" => '\u{00B0}', "plusminus" => '\u{00B1}', "multiply" => '\u{00D7}',
    "divide" => '\u{00F7}', "section" => '\u{00A7}', "paragraph" => '\u{00B6}',
    "exclamdown" => '\u{00A1}', "questiondown" => '\u{00BF}',
    "guillemotleft" => '\u{00AB}', "guillemotright" => '\u{00BB}',
    "fraction" => '\u{2044}', "perthousand" => '\u{2030}',

    // Quotation marks
    "quoteleft" => '\u{2018}', "quoteright" => '\u{2019}',
    "quotedblleft" => '\u{201C}', "quotedblright" => '\u{201D}',
    "quotesinglbase" => '\u{201A}', "quotedblbase" => '\u{201E}',

    // Currency
    "cent" => '\u{00A2}', "sterling" => '\u{00A3}', "currency" => '\u{00A4}',
    "yen" => '\u{00A5}', "Euro" => '\u{20AC}', "florin" => '\u{0192}',

    // Ligatures
    "fi" => '\u{FB01}', "fl" => '\u{FB02}', "ffi" => '\u{FB03}', "ffl" => '\u{FB04}', "ff" => '\u{FB00}',

    // Common accented Latin letters (Western European)
    "Agrave" => '\u{00C0}', "Aacute" => '\u{00C1}', "Acircumflex" => '\u{00C2}',
    "Atilde" => '\u{00C3}', "Adieresis" => '\u{00C4}', "Aring" => '\u{00C5}',
    "AE" => '\u{00C6}', "Ccedilla" => '\u{00C7}',
    "Egrave" => '\u{00C8}', "Eacute" => '\u{00C9}', "Ecircumflex" => '\u{00CA}', "Edieresis" => '\u{00CB}',
    "Igrave" => '\u{00CC}', "Iacute" => '\u{00CD}', "Icircumflex" => '\u{00CE}', "Idieresis" => '\u{00CF}',
    "Ntilde" => '\u{00D1}',
    "Ograve" => '\u{00D2}', "Oacute" => '\u{00D3}', "Ocircumflex" => '\u{00D4}',
    "Otilde" => '\u{00D5}', "Odieresis" => '\u{00D6}', "Oslash" => '\u{00D8}',
    "Ugrave" => '\u{00D9}', "Uacute" => '\u{00DA}', "Ucircumflex" => '\u{00DB}', "Udieresis" => '\u{00DC}',
    "Yacute" => '\u{00DD}', "Thorn" => '\u{00DE}', "germandbls" => '\u{00DF}',
    "agrave" => '\u{00E0}', "aacute" => '\u{00E1}', "acircumflex" => '\u{00E2}',
    "atilde" => '\u{00E3}', "adieresis" => '\u{00E4}', "aring" => '\u{00E5}',
    "ae" => '\u{00E6}', "ccedilla" => '\u{00E7}',
    "egrave" => '\u{00E8}', "eacute" => '\u{00E9}', "ecircumflex" => '\u{00EA}', "edieresis" => '\u{00EB}',
    "igrave" => '\u{00EC}', "iacute" => '\u{00ED}', "icircumflex" => '\u{00EE}', "idieresis" => '\u{00EF}',
    "ntilde" => '\u{00F1}',
    "ograve" => '\u{00F2}', "oacute" => '\u{00F3}', "ocircumflex" => '\u{00F4}',
    "otilde" => '\u{00F5}', "odieresis" => '\u{00F6}', "oslash" => '\u{00F8}',
    "ugrave" => '\u{00F9}', "uacute" => '\u{00FA}', "ucircumflex" => '\u{00FB}', "udieresis" => '\u{00FC}',
    "yacute" => '\u{00FD}', "thorn" => '\u{00FE}', "ydieresis" => '\u{00FF}',

    // Macron/caron/ring diacritics seen in Central European fonts
    "Scaron" => '\u{0160}', "scaron" => '\u{0161}', "Zcaron" => '\u{017D}', "zcaron" => '\u{017E}',
    "OE" => '\u{0152}', "oe" => '\u{0153}', "Ydieresis" => '\u{0178}',

    // Punctuation seen in non-Differences tables
    "dotlessi" => '\u{0131}', "circumflex" => '\u{02C6}', "tilde" => '\u{02DC}',
    "breve" => '\u{02D8}', "dotaccent" => '\u{02D9}', "ring" => '\u{02DA}',
    "ogonek" => '\u{02DB}', "caron" => '\u{02C7}', "hungarumlaut" => '\u{02DD}',
};

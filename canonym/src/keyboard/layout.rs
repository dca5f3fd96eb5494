//! Keys within a one-key radius of each letter.
//!
//! Only letters are centers. Neighbours include the center itself in both
//! cases, and the shifted and number-row characters of the surrounding keys.

#[rustfmt::skip]
pub(crate) const QWERTY: [(char, &str); 26] = [
    ('A', "AaQWSXZqwsxz"),
    ('B', "BbVGHNvghn"),
    ('C', "CcXDFVxdfv"),
    ('D', "DdSERFCXserfcx"),
    ('E', "EeWSDR34#$wsdr"),
    ('F', "FfDRTGVCdrtgvc"),
    ('G', "GgFTYHBVftyhbv"),
    ('H', "HhGYUJNBgyujnb"),
    ('I', "IiUJKO89(*ujko"),
    ('J', "JjHUIKMNhuikmn"),
    ('K', "KkJIOL<Mjiol,m"),
    ('L', "LlKOP:><kop;.,"),
    ('M', "MmNJKL< jkl,"),
    ('N', "NnBHJM bhjm"),
    ('O', "OoI90PLK()iplk"),
    ('P', "PpO0-[;Lo)_{:l"),
    ('Q', "Qq  12WA!@wa"),
    ('R', "Rr45TFDE$%tfde"),
    ('S', "SsAWEDXZawedxz"),
    ('T', "TtR56YGFr%^ygf"),
    ('U', "UuY78IJH&*ijh"),
    ('V', "VvCFGB cfgb"),
    ('W', "WwQ23ESAq@#esa"),
    ('X', "XxZSDC zsdc"),
    ('Y', "YyT67UHGt^&uhg"),
    ('Z', "ZzASXasx"),
];

#[rustfmt::skip]
pub(crate) const DVORAK: [(char, &str); 26] = [
    ('A', "Aa?:,Oo;'"),
    ('B', "BbXxDdHhMm "),
    ('C', "CcGg24$$4TtHh"),
    ('D', "DdIiFfGgHhBbXx"),
    ('E', "EeOo.PpUuJjQq"),
    ('F', "FfYy9%0_GgDdIi"),
    ('G', "GgFf0_2CcHhDd"),
    ('H', "HhDdGgCcTtMmBb"),
    ('I', "IiUuYyFfDdXxKk"),
    ('J', "JjQqEeUuKk "),
    ('K', "KkJjUuIiXx "),
    ('L', "LlRr6@8*/&SsNn"),
    ('M', "MmBbHhTtWw "),
    ('N', "NnTtRrLlSsVvWw"),
    ('O', "OoAa,.EeQq;'"),
    ('P', "Pp.3)1\"YyUuEe"),
    ('Q', "Qq':OoEeJj "),
    ('R', "RrCc4$6@LlNnTt"),
    ('S', "SsNnLl&/-ZzVv"),
    ('T', "TtHhCcRrNnWwMm"),
    ('U', "UuEePpYyIiKkJj"),
    ('V', "VvWwNnSsZz"),
    ('W', "Ww MmTtNnVv"),
    ('X', "Xx KkIiDdBb"),
    ('Y', "YyPp1\"9%FfIiUu"),
    ('Z', "ZzVvSs-"),
];

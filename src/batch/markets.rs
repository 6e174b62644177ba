// Known markets
//------------------------------------------------------------------------------

pub const KNOWN_MARKETS: [(&str, &str); 4] =
    [("1", "Usachevsky"), ("3", "Leninsky"), ("4", "Na Maroseyke"), ("62", "Gremm")];

pub fn market_name(id: &str) -> Option<&'static str> {
    let id = id.trim();
    KNOWN_MARKETS.iter().find(|(known, _)| *known == id).map(|&(_, name)| name)
}

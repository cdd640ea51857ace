//! Sample catalogs.
//!
//! `SAMPLE_CATALOG` mirrors the layout of a real sheet export: a column
//! order that differs from the field order, an unknown column, one blank
//! line, one price the seller typed as text and one short row.

/// 8 records: 5 available (one typed lowercase), 1 SOLD, 1 HOLD, 1 blank status.
pub const SAMPLE_CATALOG: &str = "\
set,number,name,category,rarity,condition,qty,price_bnd,status,image_direct,image_url,notes,grader
Base Set,58,Pikachu,Single,Common,NM,3,2,AVAILABLE,https://img.example/pikachu.png,,,
Base Set,4,Charizard,Single,Holo Rare,LP,1,60,SOLD,,https://img.example/charizard.png,\"Crease, back corner\",PSA
Jungle,27,Snorlax,Single,Holo Rare,NM,1,4.50,HOLD,,,,
Fossil,,Booster Box,Sealed,,,0,\"$1,200\",AVAILABLE,,,Factory sealed,

Base Set,2,Blastoise,Single,Holo Rare,MP,2,ask,AVAILABLE,,,,
Team Rocket,83,Dark Raichu,,Secret Rare,NM,1,25,available,,,,
Gym Heroes,12,Misty's Tentacool,Single,Uncommon,NM,4,8,AVAILABLE,,,,
Promo,8,Mew,Promo,Promo,NM,5,1
";

/// Header row only.
pub const EMPTY_CATALOG: &str = "name,set,price_bnd,status\n";

/// Rows with no recognizable header.
pub const HEADERLESS_CATALOG: &str = "\n\n,,\n";

/// `count` available singles priced 1, 2, 3, ... so every record is distinct.
pub fn generated_catalog(count: usize) -> String {
    let mut text = String::from("name,set,category,price_bnd,status\n");
    for index in 1..=count {
        text.push_str(&format!("Card {index},Generated,Single,{index},AVAILABLE\n"));
    }
    text
}

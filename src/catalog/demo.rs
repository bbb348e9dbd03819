//! Built-in demo catalog.

/// Sample catalog used by the "load demo data" action.
pub const DEMO_CSV: &str = "\
title,type,author,year,genre,rating,description
Elden Ring,game,FromSoftware,2022,Action RPG,4.9,An open world fantasy action role playing game set in the Lands Between.
God of War Ragnarok,game,Santa Monica Studio,2022,Action Adventure,4.8,A cinematic mythological adventure following Kratos and Atreus.
Hades,game,Supergiant Games,2020,Roguelike,4.7,A fast paced dungeon crawler inspired by Greek mythology.
The Legend of Zelda Tears of the Kingdom,game,Nintendo,2023,Adventure,4.9,A vast open world adventure across sky islands and the kingdom of Hyrule.
Red Dead Redemption 2,game,Rockstar Games,2018,Open World,4.8,A story driven western epic set in a detailed open frontier world.
Stardew Valley,game,ConcernedApe,2016,Simulation,4.6,A farming simulation game focused on community crafting and exploration.
Cyberpunk 2077,game,CD Projekt Red,2020,RPG,4.2,A futuristic role playing game set in the sprawling Night City.
Minecraft,game,Mojang Studios,2011,Sandbox,4.8,A creative sandbox game where players build explore and survive in block worlds.
Hollow Knight,game,Team Cherry,2017,Metroidvania,4.7,A challenging atmospheric platform adventure set in a ruined kingdom.
Baldurs Gate 3,game,Larian Studios,2023,CRPG,4.9,A deep narrative driven role playing game based on Dungeons and Dragons.
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse;

    #[test]
    fn demo_catalog_parses() {
        let records = parse(DEMO_CSV).unwrap();
        assert_eq!(records.len(), 10);
        assert!(records.iter().all(|r| r.year().is_some() && r.rating().is_some()));
    }
}

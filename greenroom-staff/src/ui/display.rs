//! Conversions from core search types to greenroom-ui display types

use greenroom_core::artist_search::ArtistHit;

pub use greenroom_ui::Artist;

pub fn artist_from_hit(hit: ArtistHit) -> Artist {
    Artist {
        id: hit.id,
        name: hit.name,
    }
}

pub fn artists_from_hits(hits: Vec<ArtistHit>) -> Vec<Artist> {
    hits.into_iter().map(artist_from_hit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_conversion() {
        let hit = ArtistHit {
            name: "Night Parade".to_string(),
            id: 1,
        };
        let artist = artist_from_hit(hit);
        assert_eq!(artist.id, 1);
        assert_eq!(artist.name, "Night Parade");
    }

    #[test]
    fn test_batch_keeps_order() {
        let hits = vec![
            ArtistHit {
                name: "Copper Veil".to_string(),
                id: 4,
            },
            ArtistHit {
                name: "Glass Harbor".to_string(),
                id: 5,
            },
        ];
        let artists = artists_from_hits(hits);
        assert_eq!(artists.len(), 2);
        assert_eq!(artists[0].name, "Copper Veil");
        assert_eq!(artists[1].id, 5);
    }
}

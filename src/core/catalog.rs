/// One art piece shown in the gallery. Opaque display data apart from `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArtPiece {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub image_url: &'static str,
    pub year: u16,
}

pub const SAMPLE_ART: [ArtPiece; 6] = [
    ArtPiece {
        id: "1",
        title: "L'Aube Cybernétique",
        description: "Huile sur toile & glitch art numérique. Une fusion entre la texture classique et l'erreur binaire.",
        category: "Mixte",
        image_url: "https://picsum.photos/600/800?random=1",
        year: 2023,
    },
    ArtPiece {
        id: "2",
        title: "Silence Blanc",
        description: "Sculpture 3D rendue dans le vide. L'absence de son matérialisée.",
        category: "3D",
        image_url: "https://picsum.photos/600/800?random=2",
        year: 2024,
    },
    ArtPiece {
        id: "3",
        title: "Fragments de Mémoire",
        description: "Collage génératif basé sur des données de rêves collectés.",
        category: "Algorithmique",
        image_url: "https://picsum.photos/600/800?random=3",
        year: 2022,
    },
    ArtPiece {
        id: "4",
        title: "Nebula V",
        description: "Photographie manipulée spectralement. La lumière invisible rendue visible.",
        category: "Photo",
        image_url: "https://picsum.photos/600/800?random=4",
        year: 2023,
    },
    ArtPiece {
        id: "5",
        title: "Echo",
        description: "Installation vidéo récursive. Le spectateur devient l'œuvre.",
        category: "Vidéo",
        image_url: "https://picsum.photos/600/800?random=5",
        year: 2024,
    },
    ArtPiece {
        id: "6",
        title: "Synesthésie Noire",
        description: "Représentation visuelle d'ondes sonores infra-basses.",
        category: "Sonore",
        image_url: "https://picsum.photos/600/800?random=6",
        year: 2024,
    },
];

#[inline]
pub fn find(id: &str) -> Option<(usize, &'static ArtPiece)> {
    SAMPLE_ART.iter().enumerate().find(|(_, a)| a.id == id)
}

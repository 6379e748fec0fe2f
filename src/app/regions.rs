/// The six navigable sections of the page, in page order.
///
/// Page order doubles as the tie-break order for the scroll tracker: when a
/// boundary scroll position puts two sections on the activation line, the
/// earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionId {
    Inicio,
    QuienesSomos,
    QueHacemos,
    AQuienApoyamos,
    Transparencia,
    Contacto,
}

impl RegionId {
    pub const ALL: [RegionId; 6] = [
        RegionId::Inicio,
        RegionId::QuienesSomos,
        RegionId::QueHacemos,
        RegionId::AQuienApoyamos,
        RegionId::Transparencia,
        RegionId::Contacto,
    ];

    /// Stable string identifier, matching the section anchors of the website.
    pub fn slug(self) -> &'static str {
        match self {
            RegionId::Inicio => "inicio",
            RegionId::QuienesSomos => "quienes-somos",
            RegionId::QueHacemos => "que-hacemos",
            RegionId::AQuienApoyamos => "a-quien-apoyamos",
            RegionId::Transparencia => "transparencia",
            RegionId::Contacto => "contacto",
        }
    }

    /// Label shown in the navigation.
    pub fn label(self) -> &'static str {
        match self {
            RegionId::Inicio => "Inicio",
            RegionId::QuienesSomos => "Quiénes Somos",
            RegionId::QueHacemos => "Qué Hacemos",
            RegionId::AQuienApoyamos => "A Quién Apoyamos",
            RegionId::Transparencia => "Transparencia",
            RegionId::Contacto => "Contacto",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_regions_in_page_order() {
        let slugs: Vec<&str> = RegionId::ALL.iter().map(|r| r.slug()).collect();
        assert_eq!(
            slugs,
            vec![
                "inicio",
                "quienes-somos",
                "que-hacemos",
                "a-quien-apoyamos",
                "transparencia",
                "contacto"
            ]
        );
    }

    #[test]
    fn test_slugs_are_unique() {
        for (i, a) in RegionId::ALL.iter().enumerate() {
            for b in &RegionId::ALL[i + 1..] {
                assert_ne!(a.slug(), b.slug());
            }
        }
    }

    #[test]
    fn test_labels_are_nonempty() {
        for region in RegionId::ALL {
            assert!(!region.label().is_empty());
        }
    }
}

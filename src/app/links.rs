use fltk::dialog;

/// Outbound contact links. Plain external URI navigations; nothing here owns
/// a request/response contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalLink {
    /// WhatsApp chat pre-filled with an information request.
    WhatsAppInfo,
    WhatsAppPrimary,
    WhatsAppSecondary,
    /// The foundation's location on Google Maps.
    Map,
}

impl ExternalLink {
    pub fn url(self) -> &'static str {
        match self {
            ExternalLink::WhatsAppInfo => {
                "https://wa.me/573103367911?text=Hola%2C%20quiero%20solicitar%20informaci%C3%B3n%20sobre%20la%20Fundaci%C3%B3n%20Luz%20de%20Vida"
            }
            ExternalLink::WhatsAppPrimary => "https://wa.me/573103367911",
            ExternalLink::WhatsAppSecondary => "https://wa.me/573103350100",
            ExternalLink::Map => "https://maps.app.goo.gl/dpZxhVcATAs9qP1C6",
        }
    }
}

/// Hand the link to the platform's URL handler.
pub fn open_external(link: ExternalLink) {
    if let Err(e) = open::that(link.url()) {
        dialog::alert_default(&format!("No se pudo abrir el enlace: {}", e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_links_use_wa_me() {
        for link in [
            ExternalLink::WhatsAppInfo,
            ExternalLink::WhatsAppPrimary,
            ExternalLink::WhatsAppSecondary,
        ] {
            assert!(link.url().starts_with("https://wa.me/57310"));
        }
    }

    #[test]
    fn test_info_link_carries_preset_message() {
        assert!(ExternalLink::WhatsAppInfo.url().contains("?text="));
    }

    #[test]
    fn test_map_link() {
        assert!(ExternalLink::Map.url().starts_with("https://maps.app.goo.gl/"));
    }
}

//! Quick wins, roadmap and projections

use crate::{Projection, RoadmapPhase};

use super::engine::Signals;

const FEW_KEYWORDS: usize = 3;
const LONG_DOMAIN: usize = 32;
const CLOSE_COMPETITOR: f64 = 0.6;

const MIN_CONTENT_BRIEFS: usize = 3;
const VISITS_PER_POINT: u32 = 180;
const KEYWORD_TARGET_FACTOR: f64 = 1.6;
const MIN_KEYWORD_TARGETS: u32 = 4;
const ROI_FACTOR: f64 = 1.6;

/// Three recommendations, one per signal, in fixed order
pub fn quick_wins(signals: &Signals) -> Vec<String> {
    let keywords = if signals.keyword_count < FEW_KEYWORDS {
        "Amplía tu set de keywords long tail para capturar intención transaccional."
    } else {
        "Prioriza las keywords de intención media con contenido clúster para subir CTR."
    };

    let architecture = if signals.domain_length > LONG_DOMAIN {
        "Optimiza la arquitectura de URLs para acortar slugs y mejorar el crawling."
    } else {
        "Refuerza enlaces internos hacia páginas de negocio con anchor semántico."
    };

    let competitor = if signals.similarity > CLOSE_COMPETITOR {
        "Diferencia tu propuesta de valor en meta titles para desplazar al competidor directo."
    } else {
        "Detecta los gaps de contenido respecto a tu competidor y crea comparativas dedicadas."
    };

    vec![
        keywords.to_string(),
        architecture.to_string(),
        competitor.to_string(),
    ]
}

/// Technical, content and authority sprints
pub fn roadmap(signals: &Signals) -> Vec<RoadmapPhase> {
    let briefs = signals.keyword_count.max(MIN_CONTENT_BRIEFS);

    vec![
        phase(
            "Sprint técnico",
            [
                "Optimiza Core Web Vitals mejorando LCP bajo 2.5s en tus landings prioritarias.".to_string(),
                "Implementa datos estructurados FAQ + Producto donde aplique.".to_string(),
                "Reestructura los enlaces internos siguiendo un modelo hub & spoke.".to_string(),
            ],
        ),
        phase(
            "Sprint de contenido",
            [
                format!("Crea {} briefs optimizados con entidades E-E-A-T.", briefs),
                "Incluye comparativas y tablas dinámicas para mejorar dwell time.".to_string(),
                "Activa un workflow de actualización para los artículos top 10 históricos.".to_string(),
            ],
        ),
        phase(
            "Sprint de autoridad",
            [
                "Detecta oportunidades de backlinks en dominios con DR > 55 alineados al buyer persona.".to_string(),
                "Lanza colaboraciones de guest posts y podcasts con CTAs medibles.".to_string(),
                "Monitorea menciones de marca y responde con propuestas de enlace contextual.".to_string(),
            ],
        ),
    ]
}

fn phase(title: &str, items: [String; 3]) -> RoadmapPhase {
    RoadmapPhase {
        title: title.to_string(),
        items: items.into(),
    }
}

/// Traffic, keyword target and ROI cards
pub fn projections(score: u8, signals: &Signals) -> Vec<Projection> {
    let visits = u32::from(score) * VISITS_PER_POINT;
    let targets = ((signals.keyword_count as f64 * KEYWORD_TARGET_FACTOR).round() as u32)
        .max(MIN_KEYWORD_TARGETS);
    let roi = f64::from(score) * ROI_FACTOR;

    vec![
        Projection {
            label: "Tráfico orgánico".to_string(),
            value: format!("{} visitas / mes", visits),
            description: "Proyección conservadora con optimización on-page sostenida.".to_string(),
        },
        Projection {
            label: "Keywords top 3".to_string(),
            value: format!("{} objetivos", targets),
            description: "Prioridad en términos con intención transaccional media-alta."
                .to_string(),
        },
        Projection {
            label: "ROI estimado".to_string(),
            value: format!("{:.0}%", roi),
            description: "Ahorro frente a campañas paid al mantener CPL saludable.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(keyword_count: usize, domain_length: usize, similarity: f64) -> Signals {
        Signals {
            keyword_count,
            domain_length,
            similarity,
            audience_focus: 0.06,
        }
    }

    #[test]
    fn test_quick_wins_few_keywords_short_domain_distinct_competitor() {
        let wins = quick_wins(&signals(2, 32, 0.6));
        assert_eq!(wins.len(), 3);
        assert!(wins[0].starts_with("Amplía tu set de keywords long tail"));
        assert!(wins[1].starts_with("Refuerza enlaces internos"));
        assert!(wins[2].starts_with("Detecta los gaps de contenido"));
    }

    #[test]
    fn test_quick_wins_many_keywords_long_domain_close_competitor() {
        let wins = quick_wins(&signals(3, 33, 0.61));
        assert!(wins[0].starts_with("Prioriza las keywords de intención media"));
        assert!(wins[1].starts_with("Optimiza la arquitectura de URLs"));
        assert!(wins[2].starts_with("Diferencia tu propuesta de valor"));
    }

    #[test]
    fn test_roadmap_shape() {
        let phases = roadmap(&signals(0, 0, 0.2));
        let titles: Vec<&str> = phases.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Sprint técnico", "Sprint de contenido", "Sprint de autoridad"]
        );
        assert!(phases.iter().all(|p| p.items.len() == 3));
    }

    #[test]
    fn test_content_briefs_floor_and_growth() {
        let few = roadmap(&signals(1, 0, 0.2));
        assert_eq!(few[1].items[0], "Crea 3 briefs optimizados con entidades E-E-A-T.");
        let many = roadmap(&signals(7, 0, 0.2));
        assert_eq!(many[1].items[0], "Crea 7 briefs optimizados con entidades E-E-A-T.");
    }

    #[test]
    fn test_projection_values() {
        let cards = projections(95, &signals(3, 13, 0.05));
        assert_eq!(cards[0].value, "17100 visitas / mes");
        // round(3 * 1.6) = 5
        assert_eq!(cards[1].value, "5 objetivos");
        assert_eq!(cards[2].value, "152%");
    }

    #[test]
    fn test_keyword_targets_floor() {
        let cards = projections(75, &signals(0, 0, 0.2));
        assert_eq!(cards[1].value, "4 objetivos");
        assert_eq!(cards[2].value, "120%");
        let cards = projections(75, &signals(10, 0, 0.2));
        assert_eq!(cards[1].value, "16 objetivos");
    }
}

//! Structural launch checklist shown in the admin console.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistCategory {
    Infra,
    Security,
    Financial,
    Frontend,
    Ai,
}

impl ChecklistCategory {
    /// Render order of the grouped checklist.
    pub const ORDER: [ChecklistCategory; 5] = [
        ChecklistCategory::Infra,
        ChecklistCategory::Security,
        ChecklistCategory::Financial,
        ChecklistCategory::Ai,
        ChecklistCategory::Frontend,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChecklistCategory::Infra => "Infraestrutura Core",
            ChecklistCategory::Security => "Segurança & Acesso",
            ChecklistCategory::Financial => "Módulo Financeiro",
            ChecklistCategory::Frontend => "UX & Client Side",
            ChecklistCategory::Ai => "Motor de I.A.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub label: &'static str,
    pub completed: bool,
    pub category: ChecklistCategory,
}

fn item(
    id: &'static str,
    label: &'static str,
    completed: bool,
    category: ChecklistCategory,
) -> ChecklistItem {
    ChecklistItem {
        id,
        label,
        completed,
        category,
    }
}

/// Seed state of the structural checklist. Flags reflect what the mocked
/// platform claims is already configured.
pub fn default_checklist() -> Vec<ChecklistItem> {
    use ChecklistCategory::*;
    vec![
        item("inf-1", "Conexão Banco de Dados (Postgres)", false, Infra),
        item("inf-2", "Variáveis de Ambiente (.env)", true, Infra),
        item("inf-3", "Storage Bucket (Imagens)", false, Infra),
        item("inf-4", "Backup Automático Diário", false, Infra),
        item("sec-1", "Certificado SSL/TLS (HTTPS)", true, Security),
        item("sec-2", "Firewall de Aplicação (WAF)", false, Security),
        item("sec-3", "JWT Secret Rotation", true, Security),
        item("sec-4", "Proteção contra DDOS", true, Security),
        item("fin-1", "Gateway Provider Ativo", false, Financial),
        item("fin-2", "Webhook Endpoint Validado", false, Financial),
        item("fin-3", "Split de Pagamento Configurado", false, Financial),
        item("fin-4", "Anti-fraude Ativado", true, Financial),
        item("ux-1", "SEO Metatags Globais", true, Frontend),
        item("ux-2", "Analytics Tracking (Pixel)", false, Frontend),
        item("ux-3", "Responsividade Mobile Check", true, Frontend),
        item("ux-4", "Favicon & Assets Otimizados", true, Frontend),
        item("ai-1", "Chave da API Generativa", true, Ai),
        item("ai-2", "Prompt Safety Filters", true, Ai),
        item("ai-3", "Limite de Tokens Configurado", false, Ai),
    ]
}

/// Launch readiness: `round(100 * completed / total)`. An empty checklist
/// counts as 100 (nothing pending).
pub fn readiness_percent(items: &[ChecklistItem]) -> u8 {
    if items.is_empty() {
        return 100;
    }
    let completed = items.iter().filter(|i| i.completed).count();
    ((completed as f64 / items.len() as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_checklist_starts_at_53_percent() {
        let items = default_checklist();
        assert_eq!(items.len(), 19);
        assert_eq!(readiness_percent(&items), 53);
    }

    #[test]
    fn readiness_is_rounded_per_item_ratio() {
        let mut items = default_checklist();
        for it in &mut items {
            it.completed = false;
        }
        assert_eq!(readiness_percent(&items), 0);

        items[0].completed = true;
        // 1/19 = 5.26%
        assert_eq!(readiness_percent(&items), 5);

        for it in &mut items {
            it.completed = true;
        }
        assert_eq!(readiness_percent(&items), 100);
    }

    #[test]
    fn empty_checklist_has_nothing_pending() {
        assert_eq!(readiness_percent(&[]), 100);
    }
}

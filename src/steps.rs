use crate::form::{Field, Submission, INCOME_OPTIONS};

/// How one field is rendered on its step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Text { label: &'static str, placeholder: &'static str },
    Tel { label: &'static str, placeholder: &'static str },
    TextArea { label: &'static str, placeholder: &'static str },
    /// (value, label) pairs.
    Radio { label: &'static str, options: &'static [(&'static str, &'static str)] },
    Select { label: &'static str, placeholder: &'static str, options: &'static [&'static str] },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [(Field, Input)],
}

impl Step {
    pub fn field_list(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().map(|(f, _)| *f)
    }

    /// Owned fields that still block this step, in display order.
    pub fn missing_fields(&self, record: &Submission) -> Vec<Field> {
        self.field_list().filter(|f| !record.is_filled(*f)).collect()
    }

    pub fn is_complete(&self, record: &Submission) -> bool {
        self.missing_fields(record).is_empty()
    }
}

const COMPANY_OPTIONS: [(&str, &str); 2] = [("sim", "Sim"), ("nao", "Não")];

const INVEST_OPTIONS: [(&str, &str); 2] = [
    ("sim", "SIM, consigo fazer esse investimento"),
    ("nao", "NÃO consigo fazer esse investimento"),
];

pub static STEPS: [Step; 5] = [
    Step {
        title: "Informações Pessoais",
        description: "Vamos começar com seus dados básicos",
        fields: &[(
            Field::Nome,
            Input::Text { label: "Qual seu nome?", placeholder: "Digite seu nome completo" },
        )],
    },
    Step {
        title: "Informações Profissionais",
        description: "Conte-nos sobre sua situação profissional",
        fields: &[
            (
                Field::Whatsapp,
                Input::Tel { label: "Qual o seu WhatsApp?", placeholder: "(11) 99999-9999" },
            ),
            (
                Field::PossuiEmpresa,
                Input::Radio { label: "Você possui uma empresa?", options: &COMPANY_OPTIONS },
            ),
            (
                Field::RendaMediaMensal,
                Input::Select {
                    label: "Renda média mensal?",
                    placeholder: "Selecione sua faixa de renda",
                    options: &INCOME_OPTIONS,
                },
            ),
        ],
    },
    Step {
        title: "Instagram e Motivação",
        description: "Queremos entender seus objetivos",
        fields: &[(
            Field::MotivoInstagram,
            Input::TextArea {
                label: "Por que você quer crescer no Instagram e ganhar dinheiro com essa ferramenta?",
                placeholder: "Conte-nos sua motivação e objetivos...",
            },
        )],
    },
    Step {
        title: "Perfil do Instagram",
        description: "Qual seu perfil no Instagram?",
        fields: &[(
            Field::Instagram,
            Input::Text { label: "Qual o seu Instagram?", placeholder: "@seuusuario ou link completo" },
        )],
    },
    Step {
        title: "Capacidade de Investimento",
        description: "Última pergunta sobre investimento",
        fields: &[(
            Field::PodeInvestir,
            Input::Radio { label: "Consegue investir 10K ou mais?", options: &INVEST_OPTIONS },
        )],
    },
];

pub fn step(index: usize) -> Option<&'static Step> {
    STEPS.get(index)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub label: String,
    pub percent: f64,
}

pub fn progress(index: usize) -> Progress {
    let total = STEPS.len();
    let shown = (index + 1).min(total);
    Progress {
        label: format!("{shown} de {total}"),
        percent: shown as f64 / total as f64 * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::income_option;

    fn fill(step: &Step, record: &mut Submission) {
        for (field, input) in step.fields {
            let value = match input {
                Input::Radio { options, .. } => options[0].0,
                Input::Select { options, .. } => options[0],
                _ => "algo",
            };
            record.set(*field, value);
        }
    }

    #[test]
    fn every_field_belongs_to_exactly_one_step() {
        for f in Field::ALL {
            let owners = STEPS.iter().filter(|s| s.field_list().any(|x| x == f)).count();
            assert_eq!(owners, 1, "{f:?}");
        }
    }

    #[test]
    fn empty_record_fails_every_step() {
        let record = Submission::default();
        for (i, s) in STEPS.iter().enumerate() {
            assert!(!s.is_complete(&record), "step {i}");
            assert_eq!(s.missing_fields(&record).len(), s.fields.len());
        }
    }

    #[test]
    fn filling_a_step_completes_only_that_step() {
        for (i, s) in STEPS.iter().enumerate() {
            let mut record = Submission::default();
            fill(s, &mut record);
            assert!(s.is_complete(&record), "step {i}");
            for (j, other) in STEPS.iter().enumerate() {
                if j != i {
                    assert!(!other.is_complete(&record), "step {j} after filling {i}");
                }
            }
        }
    }

    #[test]
    fn professional_step_reports_only_the_empty_whatsapp() {
        let mut record = Submission::default();
        record.set(Field::PossuiEmpresa, "sim");
        record.set(Field::RendaMediaMensal, income_option(0).unwrap());
        assert_eq!(STEPS[1].missing_fields(&record), vec![Field::Whatsapp]);
    }

    #[test]
    fn progress_label_and_percent() {
        let p = progress(0);
        assert_eq!(p.label, "1 de 5");
        assert!((p.percent - 20.0).abs() < 1e-9);
        assert_eq!(progress(4).label, "5 de 5");
        assert!((progress(4).percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn step_lookup_is_bounds_checked() {
        assert_eq!(step(0).map(|s| s.title), Some("Informações Pessoais"));
        assert!(step(STEPS.len()).is_none());
    }
}

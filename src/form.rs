use serde::Serialize;

pub const INCOME_OPTIONS: [&str; 6] = [
    "Abaixo de R$ 3.000 por mês",
    "Entre R$ 3.000 e R$ 5.000 por mês",
    "Entre R$ 5.000 e R$ 10.000 por mês",
    "Entre R$ 10.000 e R$ 20.000 por mês",
    "Entre R$ 20.000 e R$ 50.000 por mês",
    "Acima de R$ 50.000 por mês",
];

pub const YES_NO: [&str; 2] = ["sim", "nao"];

/// Maps a dropdown index to the income bracket text stored in the record.
pub fn income_option(index: usize) -> Option<&'static str> {
    INCOME_OPTIONS.get(index).copied()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Nome,
    Whatsapp,
    PossuiEmpresa,
    RendaMediaMensal,
    MotivoInstagram,
    Instagram,
    PodeInvestir,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Complete when non-blank after trimming.
    Text,
    /// Complete when the value is one of the listed options, compared verbatim.
    Choice(&'static [&'static str]),
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Nome,
        Field::Whatsapp,
        Field::PossuiEmpresa,
        Field::RendaMediaMensal,
        Field::MotivoInstagram,
        Field::Instagram,
        Field::PodeInvestir,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::Nome => "nome",
            Field::Whatsapp => "whatsapp",
            Field::PossuiEmpresa => "possuiEmpresa",
            Field::RendaMediaMensal => "rendaMediaMensal",
            Field::MotivoInstagram => "motivoInstagram",
            Field::Instagram => "instagram",
            Field::PodeInvestir => "podeInvestir",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::PossuiEmpresa | Field::PodeInvestir => FieldKind::Choice(&YES_NO),
            Field::RendaMediaMensal => FieldKind::Choice(&INCOME_OPTIONS),
            _ => FieldKind::Text,
        }
    }
}

/// Everything the lead typed so far. Lives only as long as the form does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub nome: String,
    pub whatsapp: String,
    pub possui_empresa: String,
    pub renda_media_mensal: String,
    pub motivo_instagram: String,
    pub instagram: String,
    pub pode_investir: String,
}

impl Submission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Nome => &self.nome,
            Field::Whatsapp => &self.whatsapp,
            Field::PossuiEmpresa => &self.possui_empresa,
            Field::RendaMediaMensal => &self.renda_media_mensal,
            Field::MotivoInstagram => &self.motivo_instagram,
            Field::Instagram => &self.instagram,
            Field::PodeInvestir => &self.pode_investir,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Nome => &mut self.nome,
            Field::Whatsapp => &mut self.whatsapp,
            Field::PossuiEmpresa => &mut self.possui_empresa,
            Field::RendaMediaMensal => &mut self.renda_media_mensal,
            Field::MotivoInstagram => &mut self.motivo_instagram,
            Field::Instagram => &mut self.instagram,
            Field::PodeInvestir => &mut self.pode_investir,
        }
    }

    /// Overwrites one field as-is. Checking happens later, per step.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    pub fn is_filled(&self, field: Field) -> bool {
        let v = self.get(field);
        match field.kind() {
            FieldKind::Text => !v.trim().is_empty(),
            FieldKind::Choice(options) => options.contains(&v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_for_every_field() {
        for f in Field::ALL {
            assert_eq!(Field::from_key(f.key()), Some(f));
        }
        assert_eq!(Field::from_key("email"), None);
    }

    #[test]
    fn new_record_is_empty() {
        let s = Submission::default();
        assert!(Field::ALL.iter().all(|f| s.get(*f).is_empty()));
        assert!(Field::ALL.iter().all(|f| !s.is_filled(*f)));
    }

    #[test]
    fn income_index_two_is_the_five_to_ten_bracket() {
        let mut s = Submission::default();
        s.set(Field::RendaMediaMensal, income_option(2).unwrap());
        assert_eq!(s.renda_media_mensal, "Entre R$ 5.000 e R$ 10.000 por mês");
        assert!(s.is_filled(Field::RendaMediaMensal));
        assert_eq!(income_option(6), None);
    }

    #[test]
    fn blank_text_is_not_filled() {
        let mut s = Submission::default();
        s.set(Field::Nome, "   \t");
        assert!(!s.is_filled(Field::Nome));
        s.set(Field::Nome, " Ana ");
        assert!(s.is_filled(Field::Nome));
        // stored untrimmed
        assert_eq!(s.nome, " Ana ");
    }

    #[test]
    fn choice_must_be_an_allowed_value() {
        let mut s = Submission::default();
        s.set(Field::PossuiEmpresa, "talvez");
        assert!(!s.is_filled(Field::PossuiEmpresa));
        s.set(Field::PossuiEmpresa, "nao");
        assert!(s.is_filled(Field::PossuiEmpresa));
        s.set(Field::RendaMediaMensal, "muito");
        assert!(!s.is_filled(Field::RendaMediaMensal));
    }

    #[test]
    fn serializes_with_original_field_names() {
        let mut s = Submission::default();
        s.set(Field::Nome, "Ana");
        s.set(Field::PodeInvestir, "sim");
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["nome"], "Ana");
        assert_eq!(v["podeInvestir"], "sim");
        for f in Field::ALL {
            assert!(v.get(f.key()).is_some(), "missing key {}", f.key());
        }
    }
}

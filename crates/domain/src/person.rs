//! # 人物（people）
//!
//! カタログに登録される人物を表す。一覧・取得・作成・更新・削除のすべてが
//! API から可能。

define_serial_id! {
    /// 人物 ID
    pub struct PersonId;
}

define_text_value! {
    /// 人物名
    pub struct PersonName(field = "name");
}

/// 人物エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id:   PersonId,
    name: PersonName,
}

/// 新規人物（ID 採番前）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: PersonName,
}

impl Person {
    /// 既存データから復元する
    pub fn from_db(id: PersonId, name: PersonName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// 名前を変更した新しいインスタンスを返す
    pub fn with_name(self, name: PersonName) -> Self {
        Self { name, ..self }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Luke Skywalker")]
    #[case("  Leia Organa  ")]
    fn test_人物名は受け取った値のまま保持する(#[case] input: &str) {
        let name = PersonName::new(input).unwrap();
        assert_eq!(name.as_str(), input);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_空の人物名はエラー(#[case] input: &str) {
        assert!(PersonName::new(input).is_err());
    }

    #[rstest]
    fn test_長い人物名も受け付ける() {
        let long = "a".repeat(300);
        assert_eq!(PersonName::new(long.clone()).unwrap().as_str(), long);
    }

    #[rstest]
    fn test_with_nameで名前だけが変わる() {
        let person = Person::from_db(PersonId::from_i64(1), PersonName::new("Luke").unwrap());

        let renamed = person.with_name(PersonName::new("Anakin").unwrap());

        assert_eq!(renamed.id(), PersonId::from_i64(1));
        assert_eq!(renamed.name().as_str(), "Anakin");
    }

    #[rstest]
    fn test_person_idは数値としてシリアライズされる() {
        let json = serde_json::to_value(PersonId::from_i64(7)).unwrap();
        assert_eq!(json, serde_json::json!(7));
    }
}

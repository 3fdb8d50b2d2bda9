//! # 惑星
//!
//! カタログに登録される惑星を表す。人物と同じく CRUD のすべてが API から可能。

define_serial_id! {
    /// 惑星 ID
    pub struct PlanetId;
}

define_text_value! {
    /// 惑星名
    pub struct PlanetName(field = "name");
}

/// 惑星エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    id:   PlanetId,
    name: PlanetName,
}

/// 新規惑星（ID 採番前）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: PlanetName,
}

impl Planet {
    /// 既存データから復元する
    pub fn from_db(id: PlanetId, name: PlanetName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> PlanetId {
        self.id
    }

    pub fn name(&self) -> &PlanetName {
        &self.name
    }

    /// 名前を変更した新しいインスタンスを返す
    pub fn with_name(self, name: PlanetName) -> Self {
        Self { name, ..self }
    }
}

use crate::model::Item as ModelItem;
use async_graphql::SimpleObject;

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<ModelItem> for Item {
    fn from(item: ModelItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
        }
    }
}

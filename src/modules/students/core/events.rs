#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum StudentEvent {
    StudentAdded { name: String },
    StudentRemoved { name: String },
}

//! SeaORM 实体定义
//!
//! 每个集合对应一张表：`document` 列保存完整 JSON 文档，
//! 需要按字段筛选的值额外投影为独立列并建索引。
//! Storage 层负责在表行和 models 中的文档类型之间转换。

pub mod assignments;
pub mod submitted;

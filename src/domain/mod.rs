// Domain 層：值型別與 core 依賴的介面 (ports)

pub mod model;
pub mod ports;

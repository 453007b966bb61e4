mod add;
mod divide;
mod multiply;
mod number;
mod subtract;

pub use add::add;
pub use divide::divide;
pub use multiply::multiply;
pub use number::Number;
pub use subtract::subtract;

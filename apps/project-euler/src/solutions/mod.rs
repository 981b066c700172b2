pub mod pe1;
pub mod pe10;
pub mod pe11;
pub mod pe12;
pub mod pe13;
pub mod pe14;
pub mod pe15;
pub mod pe16;
pub mod pe17;
pub mod pe18;
pub mod pe19;
pub mod pe2;
pub mod pe20;
pub mod pe3;
pub mod pe4;
pub mod pe5;
pub mod pe6;
pub mod pe7;
pub mod pe8;
pub mod pe9;

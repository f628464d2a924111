mod attributes;
mod bounded;
mod html;
mod opaque;
mod scenarios;
mod truncation;

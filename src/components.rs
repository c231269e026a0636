/*
 * Copyright 2025 Village Connect
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

pub mod CTAButton;
pub mod FeatureCard;
pub mod Footer;
pub mod HeroHeader;
pub mod Page;
pub mod SecurityFeature;

// Section components
pub mod sections {
    pub mod CallToAction;
    pub mod Features;
    pub mod Security;
}

pub use CTAButton::*;
pub use FeatureCard::*;
pub use Footer::*;
pub use HeroHeader::*;
pub use Page::*;
pub use SecurityFeature::*;

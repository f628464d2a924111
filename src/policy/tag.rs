// NOTE: these values are manually precalculated with the NameHash packing;
// consistency between the hashing algorithm and this enum is guaranteed by
// a dedicated test in name_hash.rs.
#[repr(u64)]
#[derive(Copy, Clone, Debug)]
pub enum Tag {
    Address = 6754642712u64,
    Area = 220486u64,
    Article = 7240884778u64,
    Aside = 7092522u64,
    Base = 236298u64,
    Blockquote = 265678647808810u64,
    Body = 250174u64,
    Br = 247u64,
    Caption = 8814115475u64,
    Col = 8849u64,
    Colgroup = 296936526677u64,
    Dd = 297u64,
    Details = 10025646648u64,
    Dialog = 316884620u64,
    Div = 9691u64,
    Dl = 305u64,
    Dt = 313u64,
    Embed = 11083081u64,
    Fieldset = 393343197529u64,
    Figcaption = 402842386741907u64,
    Figure = 384199402u64,
    Footer = 390751575u64,
    Form = 381682u64,
    H1 = 416u64,
    H2 = 417u64,
    H3 = 418u64,
    H4 = 419u64,
    H5 = 420u64,
    H6 = 421u64,
    Head = 436425u64,
    Header = 446899543u64,
    Hgroup = 449565525u64,
    Hr = 439u64,
    Html = 452177u64,
    Iframe = 482056778u64,
    Img = 14924u64,
    Input = 15325017u64,
    Li = 558u64,
    Link = 572016u64,
    Main = 596435u64,
    Menu = 600698u64,
    Meta = 600870u64,
    Nav = 19675u64,
    Noembed = 21083266377u64,
    Noframes = 674703296856u64,
    Ol = 657u64,
    Optgroup = 710595564373u64,
    Option = 693942931u64,
    P = 21u64,
    Plaintext = 23680792701881u64,
    Pre = 22250u64,
    Rb = 743u64,
    Rp = 757u64,
    Rt = 761u64,
    Rtc = 24360u64,
    Script = 814463673u64,
    Section = 26114570899u64,
    Select = 816359705u64,
    Source = 827153674u64,
    Style = 26016298u64,
    Table = 26418730u64,
    Tbody = 26464574u64,
    Td = 809u64,
    Textarea = 870730390854u64,
    Tfoot = 26595993u64,
    Th = 813u64,
    Thead = 26650825u64,
    Title = 26699306u64,
    Tr = 823u64,
    Track = 26974480u64,
    Ul = 849u64,
    Wbr = 28919u64,
    Xmp = 30293u64,
}

macro_rules! tag_is_one_of {
    ($name_hash:expr, [$($tag:ident),+]) => {
        $($name_hash == $crate::policy::Tag::$tag)||+
    };
}

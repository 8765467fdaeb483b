#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MajorOp {
    IllegalOpcode,
    B,
    Call,
    Ret,
    Bal,
    BranchConditional,
    FaultConditional,
    TestConditional,
    BranchBitClear,
    CompareAndBranchOrdinal,
    BranchBitSet,
    CompareAndBranchInteger,
    LoadByteOrdinal,
    StoreByteOrdinal,
    BranchIndirect,
    BranchAndLinkIndirect,
    CallIndirect,
    LoadShortOrdinal,
    StoreShortOrdinal,
    LoadAddress,
    Load,
    Store,
    LoadLong,
    StoreLong,
    LoadTriple,
    StoreTriple,
    LoadQuad,
    StoreQuad,
    LoadByteInteger,
    StoreByteInteger,
    LoadShortInteger,
    StoreShortInteger,
}

pub fn decode_major(opcode: u8) -> MajorOp {
    match opcode {
        0u8 => MajorOp::IllegalOpcode,
        1u8 => MajorOp::IllegalOpcode,
        2u8 => MajorOp::IllegalOpcode,
        3u8 => MajorOp::IllegalOpcode,
        4u8 => MajorOp::IllegalOpcode,
        5u8 => MajorOp::IllegalOpcode,
        6u8 => MajorOp::IllegalOpcode,
        7u8 => MajorOp::IllegalOpcode,
        8u8 => MajorOp::B,
        9u8 => MajorOp::Call,
        10u8 => MajorOp::Ret,
        11u8 => MajorOp::Bal,
        12u8 => MajorOp::IllegalOpcode,
        13u8 => MajorOp::IllegalOpcode,
        14u8 => MajorOp::IllegalOpcode,
        15u8 => MajorOp::IllegalOpcode,
        16u8 => MajorOp::BranchConditional,
        17u8 => MajorOp::BranchConditional,
        18u8 => MajorOp::BranchConditional,
        19u8 => MajorOp::BranchConditional,
        20u8 => MajorOp::BranchConditional,
        21u8 => MajorOp::BranchConditional,
        22u8 => MajorOp::BranchConditional,
        23u8 => MajorOp::BranchConditional,
        24u8 => MajorOp::FaultConditional,
        25u8 => MajorOp::FaultConditional,
        26u8 => MajorOp::FaultConditional,
        27u8 => MajorOp::FaultConditional,
        28u8 => MajorOp::FaultConditional,
        29u8 => MajorOp::FaultConditional,
        30u8 => MajorOp::FaultConditional,
        31u8 => MajorOp::FaultConditional,
        32u8 => MajorOp::TestConditional,
        33u8 => MajorOp::TestConditional,
        34u8 => MajorOp::TestConditional,
        35u8 => MajorOp::TestConditional,
        36u8 => MajorOp::TestConditional,
        37u8 => MajorOp::TestConditional,
        38u8 => MajorOp::TestConditional,
        39u8 => MajorOp::TestConditional,
        40u8 => MajorOp::IllegalOpcode,
        41u8 => MajorOp::IllegalOpcode,
        42u8 => MajorOp::IllegalOpcode,
        43u8 => MajorOp::IllegalOpcode,
        44u8 => MajorOp::IllegalOpcode,
        45u8 => MajorOp::IllegalOpcode,
        46u8 => MajorOp::IllegalOpcode,
        47u8 => MajorOp::IllegalOpcode,
        48u8 => MajorOp::BranchBitClear,
        49u8 => MajorOp::CompareAndBranchOrdinal,
        50u8 => MajorOp::CompareAndBranchOrdinal,
        51u8 => MajorOp::CompareAndBranchOrdinal,
        52u8 => MajorOp::CompareAndBranchOrdinal,
        53u8 => MajorOp::CompareAndBranchOrdinal,
        54u8 => MajorOp::CompareAndBranchOrdinal,
        55u8 => MajorOp::BranchBitSet,
        56u8 => MajorOp::CompareAndBranchInteger,
        57u8 => MajorOp::CompareAndBranchInteger,
        58u8 => MajorOp::CompareAndBranchInteger,
        59u8 => MajorOp::CompareAndBranchInteger,
        60u8 => MajorOp::CompareAndBranchInteger,
        61u8 => MajorOp::CompareAndBranchInteger,
        62u8 => MajorOp::CompareAndBranchInteger,
        63u8 => MajorOp::CompareAndBranchInteger,
        64u8 => MajorOp::IllegalOpcode,
        65u8 => MajorOp::IllegalOpcode,
        66u8 => MajorOp::IllegalOpcode,
        67u8 => MajorOp::IllegalOpcode,
        68u8 => MajorOp::IllegalOpcode,
        69u8 => MajorOp::IllegalOpcode,
        70u8 => MajorOp::IllegalOpcode,
        71u8 => MajorOp::IllegalOpcode,
        72u8 => MajorOp::IllegalOpcode,
        73u8 => MajorOp::IllegalOpcode,
        74u8 => MajorOp::IllegalOpcode,
        75u8 => MajorOp::IllegalOpcode,
        76u8 => MajorOp::IllegalOpcode,
        77u8 => MajorOp::IllegalOpcode,
        78u8 => MajorOp::IllegalOpcode,
        79u8 => MajorOp::IllegalOpcode,
        80u8 => MajorOp::IllegalOpcode,
        81u8 => MajorOp::IllegalOpcode,
        82u8 => MajorOp::IllegalOpcode,
        83u8 => MajorOp::IllegalOpcode,
        84u8 => MajorOp::IllegalOpcode,
        85u8 => MajorOp::IllegalOpcode,
        86u8 => MajorOp::IllegalOpcode,
        87u8 => MajorOp::IllegalOpcode,
        88u8 => MajorOp::IllegalOpcode,
        89u8 => MajorOp::IllegalOpcode,
        90u8 => MajorOp::IllegalOpcode,
        91u8 => MajorOp::IllegalOpcode,
        92u8 => MajorOp::IllegalOpcode,
        93u8 => MajorOp::IllegalOpcode,
        94u8 => MajorOp::IllegalOpcode,
        95u8 => MajorOp::IllegalOpcode,
        96u8 => MajorOp::IllegalOpcode,
        97u8 => MajorOp::IllegalOpcode,
        98u8 => MajorOp::IllegalOpcode,
        99u8 => MajorOp::IllegalOpcode,
        100u8 => MajorOp::IllegalOpcode,
        101u8 => MajorOp::IllegalOpcode,
        102u8 => MajorOp::IllegalOpcode,
        103u8 => MajorOp::IllegalOpcode,
        104u8 => MajorOp::IllegalOpcode,
        105u8 => MajorOp::IllegalOpcode,
        106u8 => MajorOp::IllegalOpcode,
        107u8 => MajorOp::IllegalOpcode,
        108u8 => MajorOp::IllegalOpcode,
        109u8 => MajorOp::IllegalOpcode,
        110u8 => MajorOp::IllegalOpcode,
        111u8 => MajorOp::IllegalOpcode,
        112u8 => MajorOp::IllegalOpcode,
        113u8 => MajorOp::IllegalOpcode,
        114u8 => MajorOp::IllegalOpcode,
        115u8 => MajorOp::IllegalOpcode,
        116u8 => MajorOp::IllegalOpcode,
        117u8 => MajorOp::IllegalOpcode,
        118u8 => MajorOp::IllegalOpcode,
        119u8 => MajorOp::IllegalOpcode,
        120u8 => MajorOp::IllegalOpcode,
        121u8 => MajorOp::IllegalOpcode,
        122u8 => MajorOp::IllegalOpcode,
        123u8 => MajorOp::IllegalOpcode,
        124u8 => MajorOp::IllegalOpcode,
        125u8 => MajorOp::IllegalOpcode,
        126u8 => MajorOp::IllegalOpcode,
        127u8 => MajorOp::IllegalOpcode,
        128u8 => MajorOp::LoadByteOrdinal,
        129u8 => MajorOp::IllegalOpcode,
        130u8 => MajorOp::StoreByteOrdinal,
        131u8 => MajorOp::IllegalOpcode,
        132u8 => MajorOp::BranchIndirect,
        133u8 => MajorOp::BranchAndLinkIndirect,
        134u8 => MajorOp::CallIndirect,
        135u8 => MajorOp::IllegalOpcode,
        136u8 => MajorOp::LoadShortOrdinal,
        137u8 => MajorOp::IllegalOpcode,
        138u8 => MajorOp::StoreShortOrdinal,
        139u8 => MajorOp::IllegalOpcode,
        140u8 => MajorOp::LoadAddress,
        141u8 => MajorOp::IllegalOpcode,
        142u8 => MajorOp::IllegalOpcode,
        143u8 => MajorOp::IllegalOpcode,
        144u8 => MajorOp::Load,
        145u8 => MajorOp::IllegalOpcode,
        146u8 => MajorOp::Store,
        147u8 => MajorOp::IllegalOpcode,
        148u8 => MajorOp::IllegalOpcode,
        149u8 => MajorOp::IllegalOpcode,
        150u8 => MajorOp::IllegalOpcode,
        151u8 => MajorOp::IllegalOpcode,
        152u8 => MajorOp::LoadLong,
        153u8 => MajorOp::IllegalOpcode,
        154u8 => MajorOp::StoreLong,
        155u8 => MajorOp::IllegalOpcode,
        156u8 => MajorOp::IllegalOpcode,
        157u8 => MajorOp::IllegalOpcode,
        158u8 => MajorOp::IllegalOpcode,
        159u8 => MajorOp::IllegalOpcode,
        160u8 => MajorOp::LoadTriple,
        161u8 => MajorOp::IllegalOpcode,
        162u8 => MajorOp::StoreTriple,
        163u8 => MajorOp::IllegalOpcode,
        164u8 => MajorOp::IllegalOpcode,
        165u8 => MajorOp::IllegalOpcode,
        166u8 => MajorOp::IllegalOpcode,
        167u8 => MajorOp::IllegalOpcode,
        168u8 => MajorOp::IllegalOpcode,
        169u8 => MajorOp::IllegalOpcode,
        170u8 => MajorOp::IllegalOpcode,
        171u8 => MajorOp::IllegalOpcode,
        172u8 => MajorOp::IllegalOpcode,
        173u8 => MajorOp::IllegalOpcode,
        174u8 => MajorOp::IllegalOpcode,
        175u8 => MajorOp::IllegalOpcode,
        176u8 => MajorOp::LoadQuad,
        177u8 => MajorOp::IllegalOpcode,
        178u8 => MajorOp::StoreQuad,
        179u8 => MajorOp::IllegalOpcode,
        180u8 => MajorOp::IllegalOpcode,
        181u8 => MajorOp::IllegalOpcode,
        182u8 => MajorOp::IllegalOpcode,
        183u8 => MajorOp::IllegalOpcode,
        184u8 => MajorOp::IllegalOpcode,
        185u8 => MajorOp::IllegalOpcode,
        186u8 => MajorOp::IllegalOpcode,
        187u8 => MajorOp::IllegalOpcode,
        188u8 => MajorOp::IllegalOpcode,
        189u8 => MajorOp::IllegalOpcode,
        190u8 => MajorOp::IllegalOpcode,
        191u8 => MajorOp::IllegalOpcode,
        192u8 => MajorOp::LoadByteInteger,
        193u8 => MajorOp::IllegalOpcode,
        194u8 => MajorOp::StoreByteInteger,
        195u8 => MajorOp::IllegalOpcode,
        196u8 => MajorOp::IllegalOpcode,
        197u8 => MajorOp::IllegalOpcode,
        198u8 => MajorOp::IllegalOpcode,
        199u8 => MajorOp::IllegalOpcode,
        200u8 => MajorOp::LoadShortInteger,
        201u8 => MajorOp::IllegalOpcode,
        202u8 => MajorOp::StoreShortInteger,
        203u8 => MajorOp::IllegalOpcode,
        204u8 => MajorOp::IllegalOpcode,
        205u8 => MajorOp::IllegalOpcode,
        206u8 => MajorOp::IllegalOpcode,
        207u8 => MajorOp::IllegalOpcode,
        208u8 => MajorOp::IllegalOpcode,
        209u8 => MajorOp::IllegalOpcode,
        210u8 => MajorOp::IllegalOpcode,
        211u8 => MajorOp::IllegalOpcode,
        212u8 => MajorOp::IllegalOpcode,
        213u8 => MajorOp::IllegalOpcode,
        214u8 => MajorOp::IllegalOpcode,
        215u8 => MajorOp::IllegalOpcode,
        216u8 => MajorOp::IllegalOpcode,
        217u8 => MajorOp::IllegalOpcode,
        218u8 => MajorOp::IllegalOpcode,
        219u8 => MajorOp::IllegalOpcode,
        220u8 => MajorOp::IllegalOpcode,
        221u8 => MajorOp::IllegalOpcode,
        222u8 => MajorOp::IllegalOpcode,
        223u8 => MajorOp::IllegalOpcode,
        224u8 => MajorOp::IllegalOpcode,
        225u8 => MajorOp::IllegalOpcode,
        226u8 => MajorOp::IllegalOpcode,
        227u8 => MajorOp::IllegalOpcode,
        228u8 => MajorOp::IllegalOpcode,
        229u8 => MajorOp::IllegalOpcode,
        230u8 => MajorOp::IllegalOpcode,
        231u8 => MajorOp::IllegalOpcode,
        232u8 => MajorOp::IllegalOpcode,
        233u8 => MajorOp::IllegalOpcode,
        234u8 => MajorOp::IllegalOpcode,
        235u8 => MajorOp::IllegalOpcode,
        236u8 => MajorOp::IllegalOpcode,
        237u8 => MajorOp::IllegalOpcode,
        238u8 => MajorOp::IllegalOpcode,
        239u8 => MajorOp::IllegalOpcode,
        240u8 => MajorOp::IllegalOpcode,
        241u8 => MajorOp::IllegalOpcode,
        242u8 => MajorOp::IllegalOpcode,
        243u8 => MajorOp::IllegalOpcode,
        244u8 => MajorOp::IllegalOpcode,
        245u8 => MajorOp::IllegalOpcode,
        246u8 => MajorOp::IllegalOpcode,
        247u8 => MajorOp::IllegalOpcode,
        248u8 => MajorOp::IllegalOpcode,
        249u8 => MajorOp::IllegalOpcode,
        250u8 => MajorOp::IllegalOpcode,
        251u8 => MajorOp::IllegalOpcode,
        252u8 => MajorOp::IllegalOpcode,
        253u8 => MajorOp::IllegalOpcode,
        254u8 => MajorOp::IllegalOpcode,
        255u8 => MajorOp::IllegalOpcode,
        _ => MajorOp::IllegalOpcode,
    }
}

impl std::fmt::Display for MajorOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            MajorOp::IllegalOpcode => "illegal",
            MajorOp::B => "b",
            MajorOp::Call => "call",
            MajorOp::Ret => "ret",
            MajorOp::Bal => "bal",
            MajorOp::BranchConditional => "bno",
            MajorOp::FaultConditional => "faultno",
            MajorOp::TestConditional => "testno",
            MajorOp::BranchBitClear => "bbc",
            MajorOp::CompareAndBranchOrdinal => "cmpobg",
            MajorOp::BranchBitSet => "bbs",
            MajorOp::CompareAndBranchInteger => "cmpibno",
            MajorOp::LoadByteOrdinal => "ldob",
            MajorOp::StoreByteOrdinal => "stob",
            MajorOp::BranchIndirect => "bx",
            MajorOp::BranchAndLinkIndirect => "balx",
            MajorOp::CallIndirect => "callx",
            MajorOp::LoadShortOrdinal => "ldos",
            MajorOp::StoreShortOrdinal => "stos",
            MajorOp::LoadAddress => "lda",
            MajorOp::Load => "ld",
            MajorOp::Store => "st",
            MajorOp::LoadLong => "ldl",
            MajorOp::StoreLong => "stl",
            MajorOp::LoadTriple => "ldt",
            MajorOp::StoreTriple => "stt",
            MajorOp::LoadQuad => "ldq",
            MajorOp::StoreQuad => "stq",
            MajorOp::LoadByteInteger => "ldib",
            MajorOp::StoreByteInteger => "stib",
            MajorOp::LoadShortInteger => "ldis",
            MajorOp::StoreShortInteger => "stis",
        })
    }
}

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegOp {
    NotBit,
    LogicalAnd,
    AndNot,
    SetBit,
    NotAnd,
    LogicalXor,
    LogicalOr,
    LogicalNor,
    LogicalXnor,
    LogicalNot,
    OrNot,
    ClrBit,
    NotOr,
    LogicalNand,
    AlterBit,
    ChkBit,
    AddOrdinal,
    AddInteger,
    SubOrdinal,
    SubInteger,
    AddWithCarry,
    SubWithCarry,
    MulOrdinal,
    MulInteger,
    DivOrdinal,
    DivInteger,
    RemOrdinal,
    RemInteger,
    ModInteger,
    ExtendedMul,
    ExtendedDiv,
    IllegalOpcode,
    ShiftLeftOrdinal,
    ShiftRightOrdinal,
    ShiftLeftInteger,
    ShiftRightInteger,
    ShiftRightDivideInteger,
    Rotate,
    CompareOrdinal,
    CompareInteger,
    CompareDecrementOrdinal,
    CompareDecrementInteger,
    CompareIncrementOrdinal,
    CompareIncrementInteger,
    ConditionalCompareOrdinal,
    ConditionalCompareInteger,
    ScanBit,
    SpanBit,
    ScanByte,
    ByteSwap,
    Move,
    MoveLong,
    MoveTriple,
    MoveQuad,
    Extract,
    Modify,
    ModifyAC,
    ModifyPC,
    ModifyTC,
    FlushReg,
    SyncFault,
    Mark,
    ForceMark,
    CallSystem,
    SyncLoad,
    SyncMove,
    SyncMoveLong,
    SyncMoveQuad,
    AtomicAdd,
    AtomicModify,
}

pub fn decode_reg(opcode: u16) -> RegOp {
    match opcode {
        1408u16 => RegOp::NotBit,
        1409u16 => RegOp::LogicalAnd,
        1410u16 => RegOp::AndNot,
        1411u16 => RegOp::SetBit,
        1412u16 => RegOp::NotAnd,
        1413u16 => RegOp::LogicalXor,
        1414u16 => RegOp::LogicalOr,
        1415u16 => RegOp::LogicalNor,
        1416u16 => RegOp::LogicalXnor,
        1417u16 => RegOp::LogicalNot,
        1418u16 => RegOp::OrNot,
        1419u16 => RegOp::ClrBit,
        1420u16 => RegOp::NotOr,
        1421u16 => RegOp::LogicalNand,
        1422u16 => RegOp::AlterBit,
        1423u16 => RegOp::ChkBit,
        1424u16 => RegOp::AddOrdinal,
        1425u16 => RegOp::AddInteger,
        1426u16 => RegOp::SubOrdinal,
        1427u16 => RegOp::SubInteger,
        1428u16 => RegOp::AddWithCarry,
        1429u16 => RegOp::SubWithCarry,
        1430u16 => RegOp::MulOrdinal,
        1431u16 => RegOp::MulInteger,
        1432u16 => RegOp::DivOrdinal,
        1433u16 => RegOp::DivInteger,
        1434u16 => RegOp::RemOrdinal,
        1435u16 => RegOp::RemInteger,
        1436u16 => RegOp::ModInteger,
        1437u16 => RegOp::ExtendedMul,
        1438u16 => RegOp::ExtendedDiv,
        1439u16 => RegOp::IllegalOpcode,
        1440u16 => RegOp::ShiftLeftOrdinal,
        1441u16 => RegOp::ShiftRightOrdinal,
        1442u16 => RegOp::ShiftLeftInteger,
        1443u16 => RegOp::ShiftRightInteger,
        1444u16 => RegOp::ShiftRightDivideInteger,
        1445u16 => RegOp::Rotate,
        1446u16 => RegOp::IllegalOpcode,
        1447u16 => RegOp::IllegalOpcode,
        1448u16 => RegOp::IllegalOpcode,
        1449u16 => RegOp::IllegalOpcode,
        1450u16 => RegOp::IllegalOpcode,
        1451u16 => RegOp::IllegalOpcode,
        1452u16 => RegOp::IllegalOpcode,
        1453u16 => RegOp::IllegalOpcode,
        1454u16 => RegOp::IllegalOpcode,
        1455u16 => RegOp::IllegalOpcode,
        1456u16 => RegOp::CompareOrdinal,
        1457u16 => RegOp::CompareInteger,
        1458u16 => RegOp::CompareDecrementOrdinal,
        1459u16 => RegOp::CompareDecrementInteger,
        1460u16 => RegOp::CompareIncrementOrdinal,
        1461u16 => RegOp::CompareIncrementInteger,
        1462u16 => RegOp::ConditionalCompareOrdinal,
        1463u16 => RegOp::ConditionalCompareInteger,
        1464u16 => RegOp::IllegalOpcode,
        1465u16 => RegOp::IllegalOpcode,
        1466u16 => RegOp::IllegalOpcode,
        1467u16 => RegOp::IllegalOpcode,
        1468u16 => RegOp::IllegalOpcode,
        1469u16 => RegOp::IllegalOpcode,
        1470u16 => RegOp::IllegalOpcode,
        1471u16 => RegOp::IllegalOpcode,
        1472u16 => RegOp::ScanBit,
        1473u16 => RegOp::SpanBit,
        1474u16 => RegOp::ScanByte,
        1475u16 => RegOp::ByteSwap,
        1476u16 => RegOp::IllegalOpcode,
        1477u16 => RegOp::IllegalOpcode,
        1478u16 => RegOp::IllegalOpcode,
        1479u16 => RegOp::IllegalOpcode,
        1480u16 => RegOp::IllegalOpcode,
        1481u16 => RegOp::IllegalOpcode,
        1482u16 => RegOp::IllegalOpcode,
        1483u16 => RegOp::IllegalOpcode,
        1484u16 => RegOp::IllegalOpcode,
        1485u16 => RegOp::IllegalOpcode,
        1486u16 => RegOp::IllegalOpcode,
        1487u16 => RegOp::IllegalOpcode,
        1488u16 => RegOp::Move,
        1489u16 => RegOp::MoveLong,
        1490u16 => RegOp::MoveTriple,
        1491u16 => RegOp::MoveQuad,
        1492u16 => RegOp::Extract,
        1493u16 => RegOp::Modify,
        1494u16 => RegOp::IllegalOpcode,
        1495u16 => RegOp::IllegalOpcode,
        1496u16 => RegOp::IllegalOpcode,
        1497u16 => RegOp::IllegalOpcode,
        1498u16 => RegOp::IllegalOpcode,
        1499u16 => RegOp::IllegalOpcode,
        1500u16 => RegOp::IllegalOpcode,
        1501u16 => RegOp::IllegalOpcode,
        1502u16 => RegOp::IllegalOpcode,
        1503u16 => RegOp::IllegalOpcode,
        1504u16 => RegOp::ModifyAC,
        1505u16 => RegOp::ModifyPC,
        1506u16 => RegOp::ModifyTC,
        1507u16 => RegOp::FlushReg,
        1508u16 => RegOp::SyncFault,
        1509u16 => RegOp::Mark,
        1510u16 => RegOp::ForceMark,
        1511u16 => RegOp::CallSystem,
        1512u16 => RegOp::IllegalOpcode,
        1513u16 => RegOp::IllegalOpcode,
        1514u16 => RegOp::IllegalOpcode,
        1515u16 => RegOp::IllegalOpcode,
        1516u16 => RegOp::IllegalOpcode,
        1517u16 => RegOp::IllegalOpcode,
        1518u16 => RegOp::IllegalOpcode,
        1519u16 => RegOp::IllegalOpcode,
        1520u16 => RegOp::SyncLoad,
        1521u16 => RegOp::SyncMove,
        1522u16 => RegOp::SyncMoveLong,
        1523u16 => RegOp::SyncMoveQuad,
        1524u16 => RegOp::AtomicAdd,
        1525u16 => RegOp::AtomicModify,
        1526u16 => RegOp::IllegalOpcode,
        1527u16 => RegOp::IllegalOpcode,
        1528u16 => RegOp::IllegalOpcode,
        1529u16 => RegOp::IllegalOpcode,
        1530u16 => RegOp::IllegalOpcode,
        1531u16 => RegOp::IllegalOpcode,
        1532u16 => RegOp::IllegalOpcode,
        1533u16 => RegOp::IllegalOpcode,
        1534u16 => RegOp::IllegalOpcode,
        1535u16 => RegOp::IllegalOpcode,
        _ => RegOp::IllegalOpcode,
    }
}

impl std::fmt::Display for RegOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            RegOp::NotBit => "notbit",
            RegOp::LogicalAnd => "and",
            RegOp::AndNot => "andnot",
            RegOp::SetBit => "setbit",
            RegOp::NotAnd => "notand",
            RegOp::LogicalXor => "xor",
            RegOp::LogicalOr => "or",
            RegOp::LogicalNor => "nor",
            RegOp::LogicalXnor => "xnor",
            RegOp::LogicalNot => "not",
            RegOp::OrNot => "ornot",
            RegOp::ClrBit => "clrbit",
            RegOp::NotOr => "notor",
            RegOp::LogicalNand => "nand",
            RegOp::AlterBit => "alterbit",
            RegOp::ChkBit => "chkbit",
            RegOp::AddOrdinal => "addo",
            RegOp::AddInteger => "addi",
            RegOp::SubOrdinal => "subo",
            RegOp::SubInteger => "subi",
            RegOp::AddWithCarry => "addc",
            RegOp::SubWithCarry => "subc",
            RegOp::MulOrdinal => "mulo",
            RegOp::MulInteger => "muli",
            RegOp::DivOrdinal => "divo",
            RegOp::DivInteger => "divi",
            RegOp::RemOrdinal => "remo",
            RegOp::RemInteger => "remi",
            RegOp::ModInteger => "modi",
            RegOp::ExtendedMul => "emul",
            RegOp::ExtendedDiv => "ediv",
            RegOp::IllegalOpcode => "illegal",
            RegOp::ShiftLeftOrdinal => "shlo",
            RegOp::ShiftRightOrdinal => "shro",
            RegOp::ShiftLeftInteger => "shli",
            RegOp::ShiftRightInteger => "shri",
            RegOp::ShiftRightDivideInteger => "shrdi",
            RegOp::Rotate => "rotate",
            RegOp::CompareOrdinal => "cmpo",
            RegOp::CompareInteger => "cmpi",
            RegOp::CompareDecrementOrdinal => "cmpdeco",
            RegOp::CompareDecrementInteger => "cmpdeci",
            RegOp::CompareIncrementOrdinal => "cmpinco",
            RegOp::CompareIncrementInteger => "cmpinci",
            RegOp::ConditionalCompareOrdinal => "concmpo",
            RegOp::ConditionalCompareInteger => "concmpi",
            RegOp::ScanBit => "scanbit",
            RegOp::SpanBit => "spanbit",
            RegOp::ScanByte => "scanbyte",
            RegOp::ByteSwap => "bswap",
            RegOp::Move => "mov",
            RegOp::MoveLong => "movl",
            RegOp::MoveTriple => "movt",
            RegOp::MoveQuad => "movq",
            RegOp::Extract => "extract",
            RegOp::Modify => "modify",
            RegOp::ModifyAC => "modac",
            RegOp::ModifyPC => "modpc",
            RegOp::ModifyTC => "modtc",
            RegOp::FlushReg => "flushreg",
            RegOp::SyncFault => "syncf",
            RegOp::Mark => "mark",
            RegOp::ForceMark => "fmark",
            RegOp::CallSystem => "calls",
            RegOp::SyncLoad => "synld",
            RegOp::SyncMove => "synmov",
            RegOp::SyncMoveLong => "synmovl",
            RegOp::SyncMoveQuad => "synmovq",
            RegOp::AtomicAdd => "atadd",
            RegOp::AtomicModify => "atmod",
        })
    }
}

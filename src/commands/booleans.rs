use super::CommandDef;

pub const COMMANDS: &[CommandDef] = command_table!{Booleans;
    "AADD" ["na1", "na2", "na3", "na4", "na5", "na6", "na7", "na8", "na9"] -> OutputAreas, "Add separate areas into one area";
    "AGLUE" ["na1", "na2", "na3", "na4", "na5", "na6", "na7", "na8", "na9"], "Generate new areas by gluing areas";
    "AINA" ["na1", "na2", "na3", "na4", "na5", "na6", "na7", "na8", "na9"], "Find the intersection of areas";
    "AINP" ["na1", "na2", "na3", "na4", "na5", "na6", "na7", "na8", "na9"], "Find the pairwise intersection of areas";
    "AINV" ["na", "nv"], "Find the intersection of an area with a volume";
    "AOVLAP" ["na1", "na2", "na3", "na4", "na5", "na6", "na7", "na8", "na9"], "Overlap areas";
    "APTN" ["na1", "na2", "na3", "na4", "na5", "na6", "na7", "na8", "na9"], "Partition areas";
    "ASBA" ["na1", "na2", "sepo", "keep1", "keep2"] -> OutputVolumeArea, "Subtract areas from areas";
    "ASBL" ["na", "nl", "", "keepa", "keepl"], "Subtract lines from areas";
    "ASBV" ["na", "nv", "sepo", "keepa", "keepv"], "Subtract volumes from areas";
    "ASBW" ["na", "sepo", "keep"], "Subtract the working plane from areas";
    "BOPTN" ["lab", "value"], "Specify Boolean operation options";
    "BTOL" ["ptol"], "Specify the Boolean operation tolerance";
    "LCSL" ["nl1", "nl2", "nl3", "nl4", "nl5", "nl6", "nl7", "nl8", "nl9"], "Divide intersecting lines at common points";
    "LGLUE" ["nl1", "nl2", "nl3", "nl4", "nl5", "nl6", "nl7", "nl8", "nl9"], "Generate new lines by gluing lines";
    "LINA" ["nl", "na"], "Find the intersection of a line with an area";
    "LINL" ["nl1", "nl2", "nl3", "nl4", "nl5", "nl6", "nl7", "nl8", "nl9"], "Find the common intersection of lines";
    "LINP" ["nl1", "nl2", "nl3", "nl4", "nl5", "nl6", "nl7", "nl8", "nl9"], "Find the pairwise intersection of lines";
    "LINV" ["nl", "nv"], "Find the intersection of a line with a volume";
    "LOVLAP" ["nl1", "nl2", "nl3", "nl4", "nl5", "nl6", "nl7", "nl8", "nl9"], "Overlap lines";
    "LPTN" ["nl1", "nl2", "nl3", "nl4", "nl5", "nl6", "nl7", "nl8", "nl9"], "Partition lines";
    "LSBA" ["nl", "na", "sepo", "keepl", "keepa"], "Subtract areas from lines";
    "LSBL" ["nl1", "nl2", "sepo", "keep1", "keep2"], "Subtract lines from lines";
    "LSBV" ["nl", "nv", "sepo", "keepl", "keepv"], "Subtract volumes from lines";
    "LSBW" ["nl", "sepo", "keep"], "Subtract the working plane from lines";
    "VADD" ["nv1", "nv2", "nv3", "nv4", "nv5", "nv6", "nv7", "nv8", "nv9"], "Add separate volumes into one volume";
    "VGLUE" ["nv1", "nv2", "nv3", "nv4", "nv5", "nv6", "nv7", "nv8", "nv9"], "Generate new volumes by gluing volumes";
    "VINP" ["nv1", "nv2", "nv3", "nv4", "nv5", "nv6", "nv7", "nv8", "nv9"], "Find the pairwise intersection of volumes";
    "VINV" ["nv1", "nv2", "nv3", "nv4", "nv5", "nv6", "nv7", "nv8", "nv9"], "Find the intersection of volumes";
    "VOVLAP" ["nv1", "nv2", "nv3", "nv4", "nv5", "nv6", "nv7", "nv8", "nv9"], "Overlap volumes";
    "VPTN" ["nv1", "nv2", "nv3", "nv4", "nv5", "nv6", "nv7", "nv8", "nv9"], "Partition volumes";
    "VSBA" ["nv", "na", "sepo", "keepv", "keepa"], "Subtract areas from volumes";
    "VSBV" ["nv1", "nv2", "sepo", "keep1", "keep2"], "Subtract volumes from volumes";
    "VSBW" ["nv", "sepo", "keep"], "Subtract the working plane from volumes";
};

use super::CommandDef;

pub const COMMANDS: &[CommandDef] = command_table!{ElementType;
    "DOF" ["lab1", "lab2", "lab3", "lab4", "lab5", "lab6", "lab7", "lab8", "lab9", "lab10"], "Add degrees of freedom to the current DOF set";
    "ET" ["itype", "ename", "kop1", "kop2", "kop3", "kop4", "kop5", "kop6", "inopr"] -> ElementType, "Define a local element type from the element library";
    "ETCHG" ["cnv"], "Change element types to their corresponding types";
    "ETCONTROL" ["eltech", "eldegene"], "Control element technologies";
    "ETDELE" ["ityp1", "ityp2", "inc"], "Delete element types";
    "ETLIST" ["ityp1", "ityp2", "inc"], "List the currently defined element types";
    "KEYOPT" ["itype", "knum", "value"], "Set element key options";
    "NSVR" ["itype", "nstv"], "Define the number of variables for user-programmable element options";
};
